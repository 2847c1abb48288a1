//! Normalized Spectral Clustering core.
//!
//! Pipeline, leaves first:
//!
//! 1. [`similarity`]: points [N, D] → dense affinity W[N, N], `w_ij = exp(-‖p_i − p_j‖ / 2)`.
//! 2. [`laplacian`]: W → `L_sym = I − D^{-½} W D^{-½}`.
//! 3. [`eigen`]: QR iteration over L with modified Gram-Schmidt factorization.
//! 4. [`eigengap`]: number of clusters from the sorted lower half of the spectrum.
//! 5. [`embedding`]: first k eigenvectors, rows ℓ2-normalised.
//! 6. [`kmeanspp`]: distance-weighted seeding of k centroids.
//! 7. [`engine`]: Lloyd refinement behind the [`engine::ClusteringEngine`] seam.
//! 8. [`jaccard`]: pairwise Jaccard agreement between two partitions.
//!
//! [`spectral::NormalizedSpectralClustering`] chains stages 1–5.
//!
//! Every stage is synchronous and allocates its own output matrix. The only
//! source of randomness is the `rand::Rng` handle passed into seeding.

pub mod eigen;
pub mod eigengap;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod jaccard;
pub mod kmeanspp;
pub mod laplacian;
pub mod matrix;
pub mod partition;
pub mod similarity;
pub mod spectral;

pub use eigen::{EigenConfig, EigenResult};
pub use embedding::Embedding;
pub use engine::{ClusteringEngine, ClusteringOutcome, LloydEngine};
pub use error::{NscError, Result};
pub use kmeanspp::{CentroidSet, KMeansPlusPlus};
pub use matrix::PointSet;
pub use partition::ClusterPartition;
pub use spectral::{ClusterCount, NormalizedSpectralClustering, SpectralConfig, SpectralOutput};

#[cfg(test)]
mod tests;
