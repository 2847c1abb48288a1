//! Normalized Spectral Clustering, stages 1–5 chained.
//!
//! points [N, D] → W[N, N] → L_sym[N, N] → (Ā, Q̄) → k → T[N, k]
//!
//! The eigengap heuristic is evaluated on every run, so the suggested k is
//! reported even when the caller fixes k. When k is fixed and the heuristic
//! is undefined (N ≤ 2) the run still succeeds with `heuristic_k == None`.
pub mod stage;

pub use stage::NormalizedSpectralClustering;

use crate::eigen::EigenConfig;
use crate::embedding::Embedding;

/// How the embedding dimension is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterCount {
    /// Caller-supplied k, typically the generator's.
    Fixed(usize),
    /// k from [`crate::eigengap::eigen_gap`].
    Eigengap,
}

/// Configuration for [`NormalizedSpectralClustering`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralConfig {
    pub eigen: EigenConfig,
    pub cluster_count: ClusterCount,
}

impl Default for SpectralConfig {
    fn default() -> Self {
        Self {
            eigen: EigenConfig::default(),
            cluster_count: ClusterCount::Eigengap,
        }
    }
}

/// Embedding plus the diagnostics of the stages that produced it.
#[derive(Debug, Clone)]
pub struct SpectralOutput {
    pub embedding: Embedding,

    /// Embedding dimension actually used.
    pub k: usize,

    /// What the eigengap heuristic suggested, if defined.
    pub heuristic_k: Option<usize>,

    /// diag(Ā), ascending.
    pub eigenvalues: Vec<f64>,

    pub iterations: usize,
    pub converged: bool,

    /// Zero-degree nodes of the similarity graph.
    pub isolated: Vec<usize>,
}
