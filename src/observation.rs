use super::*;

/// Auxiliary bike-hire attribute carried alongside each reading.
/// Never participates in distance or centroid computation.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct BikeHire {
    pub hire_time: Concentration,
}

/// One row of the dataset plus its mutable assignment state.
///
/// The readings are fixed at load time. The engine only ever touches
/// `cluster` and `best`: the index of the assigned centroid, and the
/// distance recorded by the most recent improving comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pollution: Pollution,
    bike: BikeHire,
    cluster: Option<usize>,
    best: Distance,
}

impl Observation {
    pub fn new(pollution: Pollution, bike: BikeHire) -> Self {
        Self {
            pollution,
            bike,
            cluster: None,
            best: Distance::INFINITY,
        }
    }
    pub fn pollution(&self) -> &Pollution {
        &self.pollution
    }
    pub fn bike(&self) -> &BikeHire {
        &self.bike
    }
    /// Assigned cluster index, `None` until the first improving comparison.
    pub fn cluster(&self) -> Option<usize> {
        self.cluster
    }
    /// Distance to the assigned centroid at the time of assignment.
    pub fn best(&self) -> Distance {
        self.best
    }
    /// Clears any assignment carried over from an earlier run.
    pub(crate) fn reset(&mut self) {
        self.cluster = None;
        self.best = Distance::INFINITY;
    }
    /// Records an improving assignment if `distance` beats the live bound.
    pub(crate) fn witness(&mut self, distance: Distance, j: usize) -> bool {
        if distance < self.best {
            self.cluster = Some(j);
            self.best = distance;
            true
        } else {
            false
        }
    }
}

impl From<(Concentration, Concentration, Concentration, Concentration)> for Observation {
    fn from((no, so2, o3, hire): (Concentration, Concentration, Concentration, Concentration)) -> Self {
        Self::new(Pollution::new(no, so2, o3), BikeHire { hire_time: hire })
    }
}

impl Arbitrary for Observation {
    fn random() -> Self {
        const SCALE: Concentration = 3600.;
        Self::new(
            Pollution::random(),
            BikeHire {
                hire_time: rand::random::<Concentration>() * SCALE,
            },
        )
    }
}

/// Export line: NO, SO2, O3, hire time.
impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{:?}", self.pollution, self.bike.hire_time)
    }
}
