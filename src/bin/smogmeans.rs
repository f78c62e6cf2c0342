//! Cluster pollution readings from the working directory.
//!
//! Reads `observations.csv` and `centroids.csv`, runs k-means to
//! convergence, and writes `cluster1.csv` … `cluster4.csv`.

use smogmeans::*;

fn main() -> anyhow::Result<()> {
    log()?;
    let dataset = load_observations(OBSERVATIONS_PATH)?;
    let kmeans = load_centroids::<CLUSTER_COUNT>(CENTROIDS_PATH)?;
    let mut engine = Engine::new(dataset, kmeans);
    let summary = engine.run(&Export::default())?;
    log::info!("{:<32}{:<32}", "populations", format!("{:?}", engine.populations()));
    log::info!("{:<32}{:<32}", "reassignments", summary.reassignments);
    Ok(())
}
