use super::*;

/// A point in the three-dimensional pollution space.
///
/// Both observations and centroids live here; distance and centroid
/// recomputation only ever look at these three attributes.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Pollution {
    pub nitric_oxide: Concentration,
    pub sulphur_dioxide: Concentration,
    pub ozone: Concentration,
}

impl Pollution {
    pub fn new(
        nitric_oxide: Concentration,
        sulphur_dioxide: Concentration,
        ozone: Concentration,
    ) -> Self {
        Self {
            nitric_oxide,
            sulphur_dioxide,
            ozone,
        }
    }

    /// Euclidean distance over (NO, SO2, O3).
    pub fn distance(&self, other: &Self) -> Distance {
        let dno = self.nitric_oxide - other.nitric_oxide;
        let dso = self.sulphur_dioxide - other.sulphur_dioxide;
        let doz = self.ozone - other.ozone;
        (dno * dno + dso * dso + doz * doz).sqrt()
    }
}

impl From<(Concentration, Concentration, Concentration)> for Pollution {
    fn from((no, so2, o3): (Concentration, Concentration, Concentration)) -> Self {
        Self::new(no, so2, o3)
    }
}

impl Arbitrary for Pollution {
    fn random() -> Self {
        const SCALE: Concentration = 100.;
        Self::new(
            rand::random::<Concentration>() * SCALE,
            rand::random::<Concentration>() * SCALE,
            rand::random::<Concentration>() * SCALE,
        )
    }
}

impl std::fmt::Display for Pollution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?},{:?},{:?}",
            self.nitric_oxide, self.sulphur_dioxide, self.ozone
        )
    }
}
