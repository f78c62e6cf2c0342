use super::*;

/// The mean position of one cluster in pollution space.
///
/// Centroids are never mutated; each iteration builds a fresh set
/// from the current assignments and replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Centroid(Pollution);

impl Centroid {
    pub fn pollution(&self) -> &Pollution {
        &self.0
    }
    pub fn distance(&self, observation: &Observation) -> Distance {
        self.0.distance(observation.pollution())
    }
}

impl From<Pollution> for Centroid {
    fn from(pollution: Pollution) -> Self {
        Self(pollution)
    }
}

impl From<(Concentration, Concentration, Concentration)> for Centroid {
    fn from(triple: (Concentration, Concentration, Concentration)) -> Self {
        Self(Pollution::from(triple))
    }
}

impl Arbitrary for Centroid {
    fn random() -> Self {
        Self(Pollution::random())
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0)
    }
}
