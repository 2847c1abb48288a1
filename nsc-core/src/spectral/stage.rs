//! Executor chaining similarity, Laplacian, eigensolver, eigengap and
//! embedding over one point set.

use log::{debug, info, warn};
use smartcore::linalg::basic::arrays::Array;

use crate::eigen::qr_iteration;
use crate::eigengap::{eigen_gap, sorted_ascending};
use crate::embedding::spectral_embedding;
use crate::error::{NscError, Result};
use crate::laplacian::normalized_laplacian;
use crate::matrix::PointSet;
use crate::similarity::weighted_adjacency;
use crate::spectral::{ClusterCount, SpectralConfig, SpectralOutput};

pub struct NormalizedSpectralClustering {
    pub config: SpectralConfig,
}

impl NormalizedSpectralClustering {
    pub fn new(config: SpectralConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(SpectralConfig::default())
    }

    /// Run stages 1–5 on `points`.
    ///
    /// Fails on empty input, on a fixed k outside `1..=N`, and in eigengap
    /// mode when the heuristic is undefined.
    pub fn execute(&self, points: &PointSet) -> Result<SpectralOutput> {
        let (n, d) = points.shape();
        info!("╔═══════════════════════════════════════════╗");
        info!("║   Normalized Spectral Clustering          ║");
        info!("╚═══════════════════════════════════════════╝");
        info!("Input: N={}, D={}, k={:?}", n, d, self.config.cluster_count);

        if let ClusterCount::Fixed(k) = self.config.cluster_count {
            if k == 0 || k > n {
                return Err(NscError::InvalidClusterCount { k, n });
            }
        }

        let w = weighted_adjacency(points)?;
        let laplacian = normalized_laplacian(&w)?;
        let eigen = qr_iteration(&laplacian.matrix, &self.config.eigen)?;

        if !eigen.converged {
            debug!(
                "Eigensolver used its full budget of {} iteration(s)",
                eigen.iterations
            );
        }

        let eigenvalues = sorted_ascending(&eigen.eigenvalues());
        let heuristic = eigen_gap(&eigenvalues);

        let (k, heuristic_k) = match (self.config.cluster_count, heuristic) {
            (ClusterCount::Eigengap, Ok(h)) => (h, Some(h)),
            (ClusterCount::Eigengap, Err(e)) => return Err(e),
            (ClusterCount::Fixed(k), Ok(h)) => {
                if h != k {
                    debug!("Eigengap suggests k={}, using fixed k={}", h, k);
                }
                (k, Some(h))
            }
            (ClusterCount::Fixed(k), Err(e)) => {
                warn!("{}, keeping fixed k={}", e, k);
                (k, None)
            }
        };

        let embedding = spectral_embedding(&eigen, k)?;

        info!(
            "✓ Spectral embedding ready: {}×{} ({} QR step(s), converged={})",
            embedding.n_points(),
            embedding.k(),
            eigen.iterations,
            eigen.converged
        );

        Ok(SpectralOutput {
            embedding,
            k,
            heuristic_k,
            eigenvalues,
            iterations: eigen.iterations,
            converged: eigen.converged,
            isolated: laplacian.isolated,
        })
    }
}
