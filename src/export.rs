use super::*;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Writes the converged partition as one CSV file per cluster.
///
/// Each line is `no,so2,o3,hire_time` in dataset order. Files are
/// 1-indexed: cluster `j` lands in `{prefix}{j + 1}.csv`.
#[derive(Debug, Clone)]
pub struct Export {
    directory: PathBuf,
    prefix: String,
}

impl Default for Export {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Export {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            prefix: OUTPUT_PREFIX.to_string(),
        }
    }
    pub fn with_prefix(self, prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..self
        }
    }
    /// Destination file for cluster `j`.
    pub fn path(&self, j: usize) -> PathBuf {
        self.directory.join(format!("{}{}.csv", self.prefix, j + 1))
    }

    /// Writes all K files. I/O failures are logged, never propagated,
    /// so partially written files may remain.
    pub fn write<const K: usize>(&self, dataset: &[Observation]) {
        match self.try_write::<K>(dataset) {
            Ok(()) => log::info!("{:<32}{:<32}", "exported clusters", self.directory.display()),
            Err(e) => log::error!("failure in export: {:#}", e),
        }
    }

    fn try_write<const K: usize>(&self, dataset: &[Observation]) -> anyhow::Result<()> {
        let mut sinks = (0..K)
            .map(|j| File::create(self.path(j)).map(BufWriter::new))
            .collect::<Result<Vec<_>, _>>()?;
        for x in dataset {
            match x.cluster().filter(|j| *j < K) {
                Some(j) => writeln!(sinks[j], "{}", x)?,
                None => log::warn!("unknown cluster class {:?} for {}", x.cluster(), x),
            }
        }
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
