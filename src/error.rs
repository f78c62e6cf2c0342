use thiserror::Error;

/// Failures that stop a clustering run.
#[derive(Error, Debug)]
pub enum ClusterError {
    #[error("cluster {index} has no members; its centroid is undefined")]
    EmptyCluster { index: usize },

    #[error("expected {expected} initial centroids, found {found}")]
    CentroidCount { expected: usize, found: usize },

    #[error("csv input: {0}")]
    Csv(#[from] csv::Error),
}
