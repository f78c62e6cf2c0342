use super::*;
use std::io::Read;
use std::path::Path;

/// One dataset row: `nitric_oxide,sulphur_dioxide,ozone,hire_time`.
#[derive(Debug, serde::Deserialize)]
struct Row {
    nitric_oxide: Concentration,
    sulphur_dioxide: Concentration,
    ozone: Concentration,
    hire_time: Concentration,
}

impl From<Row> for Observation {
    fn from(row: Row) -> Self {
        Observation::from((row.nitric_oxide, row.sulphur_dioxide, row.ozone, row.hire_time))
    }
}

/// Reads a headed observation CSV from disk.
pub fn load_observations(path: impl AsRef<Path>) -> Result<Vec<Observation>, ClusterError> {
    log::info!("{:<32}{:<32}", "loading observations", path.as_ref().display());
    read_observations(std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?)
}

/// Reads a headed centroid CSV from disk. Row count must equal K.
pub fn load_centroids<const K: usize>(
    path: impl AsRef<Path>,
) -> Result<[Centroid; K], ClusterError> {
    log::info!("{:<32}{:<32}", "loading centroids", path.as_ref().display());
    read_centroids(std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?)
}

pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>, ClusterError> {
    csv::Reader::from_reader(reader)
        .deserialize::<Row>()
        .map(|row| row.map(Observation::from).map_err(ClusterError::from))
        .collect()
}

pub fn read_centroids<const K: usize, R: Read>(reader: R) -> Result<[Centroid; K], ClusterError> {
    csv::Reader::from_reader(reader)
        .deserialize::<Pollution>()
        .map(|row| row.map(Centroid::from).map_err(ClusterError::from))
        .collect::<Result<Vec<_>, _>>()?
        .try_into()
        .map_err(|found: Vec<Centroid>| ClusterError::CentroidCount {
            expected: K,
            found: found.len(),
        })
}
