use super::*;

/// Trait for centroid computation via incremental aggregation.
///
/// The "absorb" pattern generalizes mean computation: members are folded
/// one at a time into an accumulator that starts from `identity()`.
///
/// # Invariant
///
/// After absorbing N points, resolving the accumulator yields the
/// arithmetic mean of those points.
pub trait Absorb {
    /// Point type folded into the accumulator.
    type Member;
    /// Returns the neutral element for absorption.
    fn identity() -> Self;
    /// Folds one more member into the accumulator.
    fn absorb(self, other: &Self::Member) -> Self;
}

/// Running per-attribute sum and member count for one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tally {
    sum: Pollution,
    n: usize,
}

impl Tally {
    pub fn n(&self) -> usize {
        self.n
    }
    /// Divides sums by count. `None` for an empty cluster.
    pub fn mean(&self) -> Option<Centroid> {
        match self.n {
            0 => None,
            n => Some(Centroid::from(Pollution::new(
                self.sum.nitric_oxide / n as Concentration,
                self.sum.sulphur_dioxide / n as Concentration,
                self.sum.ozone / n as Concentration,
            ))),
        }
    }
}

impl Absorb for Tally {
    type Member = Observation;
    fn identity() -> Self {
        Self::default()
    }
    fn absorb(self, other: &Observation) -> Self {
        let p = other.pollution();
        Self {
            sum: Pollution::new(
                self.sum.nitric_oxide + p.nitric_oxide,
                self.sum.sulphur_dioxide + p.sulphur_dioxide,
                self.sum.ozone + p.ozone,
            ),
            n: self.n + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_no_mean() {
        assert_eq!(Tally::identity().mean(), None);
    }

    #[test]
    fn mean_of_members() {
        let tally = [
            Observation::from((1., 2., 3., 0.)),
            Observation::from((3., 4., 5., 99.)),
        ]
        .iter()
        .fold(Tally::identity(), Tally::absorb);
        assert_eq!(tally.n(), 2);
        assert_eq!(tally.mean(), Some(Centroid::from((2., 3., 4.))));
    }
}
