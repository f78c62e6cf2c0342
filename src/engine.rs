//! Nearest-centroid assignment and centroid recomputation, iterated to a fixed point.

use super::*;

/// Summary of a converged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Convergence {
    /// Assignment passes executed, including the final unchanged one.
    pub iterations: usize,
    /// Improving assignments recorded across every pass.
    pub reassignments: usize,
}

/// K-means over the pollution attributes of a fixed dataset.
///
/// The engine owns the dataset, which it annotates but never reorders,
/// and the current centroid set, which it replaces wholesale after every
/// assignment pass. `K` is the cluster count for the whole run: it sizes
/// the centroid set, the recomputation and the export buckets.
#[derive(Debug, Clone)]
pub struct Engine<const K: usize> {
    dataset: Vec<Observation>,
    kmeans: [Centroid; K],
}

impl<const K: usize> Engine<K> {
    /// Takes ownership of the dataset and clears any prior assignment,
    /// so every observation starts unassigned against these centroids.
    pub fn new(mut dataset: Vec<Observation>, kmeans: [Centroid; K]) -> Self {
        const { assert!(K >= 1, "at least one cluster") };
        dataset.iter_mut().for_each(Observation::reset);
        Self { dataset, kmeans }
    }
    pub fn dataset(&self) -> &[Observation] {
        &self.dataset
    }
    pub fn kmeans(&self) -> &[Centroid; K] {
        &self.kmeans
    }
    pub fn kmean(&self, j: usize) -> &Centroid {
        &self.kmeans[j]
    }
    /// Releases the annotated dataset.
    pub fn into_dataset(self) -> Vec<Observation> {
        self.dataset
    }

    /// Euclidean distance from an observation to centroid `j`.
    pub fn distance(&self, observation: &Observation, j: usize) -> Distance {
        self.kmean(j).distance(observation)
    }

    /// Moves observation `i` towards its nearest centroid.
    pub fn assign_nearest(&mut self, i: usize) -> bool {
        Self::nearest(&self.kmeans, &mut self.dataset[i])
    }

    /// One assignment pass over the dataset, in order.
    pub fn assign_all(&mut self) -> bool {
        self.pass() > 0
    }

    /// Mean of the observations currently assigned to cluster `j`.
    pub fn recompute_centroid(&self, j: usize) -> Result<Centroid, ClusterError> {
        self.dataset
            .iter()
            .filter(|x| x.cluster() == Some(j))
            .fold(Tally::identity(), Tally::absorb)
            .mean()
            .ok_or(ClusterError::EmptyCluster { index: j })
    }

    /// Fresh centroid set built from the current assignments.
    pub fn recompute_all(&self) -> Result<[Centroid; K], ClusterError> {
        let mut kmeans = [Centroid::default(); K];
        for (j, kmean) in kmeans.iter_mut().enumerate() {
            *kmean = self.recompute_centroid(j)?;
        }
        Ok(kmeans)
    }

    /// One iteration: assign every observation, then replace the centroids.
    /// Returns the number of observations that improved this pass.
    pub fn step(&mut self) -> Result<usize, ClusterError> {
        let changes = self.pass();
        self.kmeans = self.recompute_all()?;
        Ok(changes)
    }

    /// Iterates until an assignment pass makes no improvement.
    ///
    /// Centroids are recomputed after the final unchanged pass too.
    /// An empty cluster aborts the run.
    pub fn converge(&mut self) -> Result<Convergence, ClusterError> {
        log::info!("{:<32}{:<32}", "kmeans iterating", self.dataset.len());
        let mut summary = Convergence::default();
        loop {
            let changes = self.step()?;
            summary.iterations += 1;
            summary.reassignments += changes;
            log::debug!("{:3} {:>8}", summary.iterations, changes);
            if changes == 0 {
                break;
            }
        }
        log::info!(
            "{:<32}{:<32}",
            "kmeans converged",
            format!("{} iterations, rms {:.4}", summary.iterations, self.rms())
        );
        Ok(summary)
    }

    /// Converges, then writes one file per cluster.
    pub fn run(&mut self, export: &Export) -> Result<Convergence, ClusterError> {
        let summary = self.converge()?;
        export.write::<K>(self.dataset());
        Ok(summary)
    }

    /// Members per cluster under the current assignment.
    pub fn populations(&self) -> [usize; K] {
        let mut counts = [0; K];
        self.dataset
            .iter()
            .filter_map(Observation::cluster)
            .for_each(|j| counts[j] += 1);
        counts
    }

    /// Root-mean-square distance of assigned observations to their centroids.
    pub fn rms(&self) -> Distance {
        let (sum, n) = self
            .dataset
            .iter()
            .filter_map(|x| x.cluster().map(|j| self.distance(x, j)))
            .fold((0., 0usize), |(sum, n), d| (sum + d * d, n + 1));
        match n {
            0 => 0.,
            n => (sum / n as Distance).sqrt(),
        }
    }

    fn pass(&mut self) -> usize {
        let ref kmeans = self.kmeans;
        self.dataset
            .iter_mut()
            .map(|x| Self::nearest(kmeans, x))
            .filter(|changed| *changed)
            .count()
    }

    /// Walks the centroids in index order. Each candidate is compared against
    /// the observation's live bound, which may already have tightened earlier
    /// in this same walk.
    fn nearest(kmeans: &[Centroid; K], x: &mut Observation) -> bool {
        let mut changed = false;
        for (j, kmean) in kmeans.iter().enumerate() {
            let distance = kmean.distance(x);
            changed |= x.witness(distance, j);
        }
        changed
    }
}
