//! K-means clustering of air-pollution readings.
//!
//! Each [`Observation`] pairs a pollution reading (nitric oxide, sulphur dioxide,
//! ozone) with a bike-hire duration. The [`Engine`] partitions the dataset into a
//! fixed number of clusters over the three pollution attributes only, then the
//! [`Export`] step writes one CSV per cluster.
//!
//! ## Pipeline
//!
//! 1. **Load** — [`load_observations`] and [`load_centroids`] read headed CSV files
//! 2. **Assign** — every observation moves to its nearest centroid
//! 3. **Recompute** — every centroid becomes the mean of its members
//! 4. **Repeat** — until an assignment pass makes no improvement
//! 5. **Export** — `cluster1.csv` … `clusterK.csv`
//!
//! ## Core Types
//!
//! - [`Pollution`] — A point in nitric-oxide / sulphur-dioxide / ozone space
//! - [`Observation`] — A reading plus its mutable assignment state
//! - [`Centroid`] — The mean position of one cluster
//! - [`Tally`] — Running sum used to recompute a centroid
mod absorb;
mod centroid;
mod engine;
mod error;
mod export;
mod loader;
mod observation;
mod pollution;

pub use absorb::*;
pub use centroid::*;
pub use engine::*;
pub use error::*;
pub use export::*;
pub use loader::*;
pub use observation::*;
pub use pollution::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Pollutant concentrations and hire durations.
pub type Concentration = f64;
/// Euclidean distance in pollution space.
pub type Distance = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUN PARAMETERS
// ============================================================================
/// Number of clusters used by the binary.
pub const CLUSTER_COUNT: usize = 4;
/// Dataset read by the binary, relative to the working directory.
pub const OBSERVATIONS_PATH: &str = "observations.csv";
/// Initial centroids read by the binary, one row per cluster.
pub const CENTROIDS_PATH: &str = "centroids.csv";
/// Per-cluster output files are named `{OUTPUT_PREFIX}{index + 1}.csv`.
pub const OUTPUT_PREFIX: &str = "cluster";
/// Directory receiving timestamped run logs.
pub const LOGS_DIRECTORY: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates the logs directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all(LOGS_DIRECTORY)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("{}/{}.log", LOGS_DIRECTORY, time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
