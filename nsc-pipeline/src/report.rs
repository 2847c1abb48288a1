use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;
use crate::persist::Artifacts;

/// Summary of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub n: usize,
    /// k the data was generated from.
    pub generator_k: usize,
    /// k used by both algorithms.
    pub used_k: usize,
    pub heuristic_k: Option<usize>,
    pub dimension: usize,
    pub random: bool,

    pub jaccard_spectral: f64,
    pub jaccard_kmeans: f64,

    pub eigen_iterations: usize,
    pub eigen_converged: bool,

    pub spectral_sizes: Vec<usize>,
    pub kmeans_sizes: Vec<usize>,

    pub artifacts: Option<Artifacts>,
}

impl RunReport {
    pub fn write_json(&self, path: &Path) -> PipelineResult<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data was generated from the values:")?;
        writeln!(f, "n = {} , k = {}", self.n, self.generator_k)?;
        writeln!(f, "The k that was used for both algorithms was {}", self.used_k)?;
        writeln!(
            f,
            "The Jaccard measure for Spectral Clustering: {}",
            self.jaccard_spectral
        )?;
        write!(f, "The Jaccard measure for K-means: {}", self.jaccard_kmeans)
    }
}
