//! Stages 6–7: seeding and refinement behind a pluggable engine.
//!
//! The refinement step is an external collaborator: anything implementing
//! [`ClusteringEngine`] takes seeded centroids and returns one label per
//! point, or `None` when it cannot produce an assignment. [`LloydEngine`]
//! is the in-crate implementation.
//!
//! Lloyd loop:
//!
//! ```text
//! repeat up to max_iter:
//!     label_i  = argmin_c ‖p_i − μ_c‖²      ties → lowest c
//!     μ'_c     = mean of points labelled c  empty → μ'_c = μ_c
//!     shift    = Σ_c ‖μ'_c − μ_c‖²
//!     stop when shift == 0
//! ```
//!
//! The labels returned are those of the last assignment step, computed
//! against the centroids before their final update.

use log::{debug, info, trace, warn};
use rand::Rng;
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;
use crate::kmeanspp::{kmeans_pp_seed, squared_distance, CentroidSet};
use crate::partition::ClusterPartition;

/// Refines seeded centroids into a label per point.
pub trait ClusteringEngine {
    /// `points` is [N, d], `initial` is [k, d]. Returns `None` when no
    /// assignment could be produced; otherwise exactly N labels, each `< k`.
    fn refine(
        &self,
        points: &DenseMatrix<f64>,
        initial: &DenseMatrix<f64>,
        k: usize,
        max_iter: usize,
    ) -> Option<Vec<usize>>;

    fn name(&self) -> &str;
}

/// Plain Lloyd iteration on squared Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LloydEngine;

impl LloydEngine {
    fn nearest(point: &[f64], centroids: &[Vec<f64>]) -> usize {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (c, centroid) in centroids.iter().enumerate() {
            let dist = squared_distance(point, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = c;
            }
        }
        best
    }
}

impl ClusteringEngine for LloydEngine {
    fn refine(
        &self,
        points: &DenseMatrix<f64>,
        initial: &DenseMatrix<f64>,
        k: usize,
        max_iter: usize,
    ) -> Option<Vec<usize>> {
        let (n, d) = points.shape();
        let (ki, di) = initial.shape();
        if n == 0 || k == 0 || ki != k || di != d {
            warn!(
                "Lloyd: inconsistent input (N={}, d={}, k={}, initial {}×{})",
                n, d, k, ki, di
            );
            return None;
        }

        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| points.get_row(i).iterator(0).copied().collect())
            .collect();
        let mut centroids: Vec<Vec<f64>> = (0..k)
            .map(|c| initial.get_row(c).iterator(0).copied().collect())
            .collect();
        let mut labels = vec![0usize; n];

        for iter in 0..max_iter {
            for (label, p) in labels.iter_mut().zip(rows.iter()) {
                *label = Self::nearest(p, &centroids);
            }

            let mut sums = vec![vec![0.0; d]; k];
            let mut counts = vec![0usize; k];
            for (&label, p) in labels.iter().zip(rows.iter()) {
                counts[label] += 1;
                for (s, v) in sums[label].iter_mut().zip(p.iter()) {
                    *s += v;
                }
            }

            let mut shift = 0.0;
            for c in 0..k {
                if counts[c] == 0 {
                    continue;
                }
                let updated: Vec<f64> = sums[c].iter().map(|s| s / counts[c] as f64).collect();
                shift += squared_distance(&updated, &centroids[c]);
                centroids[c] = updated;
            }

            trace!("Lloyd iteration {}: centroid shift {:.3e}", iter + 1, shift);
            if shift == 0.0 {
                debug!("Lloyd converged after {} iteration(s)", iter + 1);
                return Some(labels);
            }
        }

        debug!("Lloyd stopped at max_iter={}", max_iter);
        Some(labels)
    }

    fn name(&self) -> &str {
        "lloyd"
    }
}

/// Result of seeding plus refinement.
#[derive(Debug, Clone)]
pub enum ClusteringOutcome {
    Clustered {
        labels: Vec<usize>,
        partition: ClusterPartition,
        seeds: CentroidSet,
    },
    /// The engine returned no assignment.
    NoResult { engine: String },
}

impl ClusteringOutcome {
    pub fn partition(&self) -> Option<&ClusterPartition> {
        match self {
            ClusteringOutcome::Clustered { partition, .. } => Some(partition),
            ClusteringOutcome::NoResult { .. } => None,
        }
    }
}

/// K-means++ seeding followed by `engine.refine`.
///
/// Labels the engine returns are validated: a wrong count or a label `>= k`
/// is treated the same as no result.
pub fn seed_and_refine<R: Rng + ?Sized>(
    points: &DenseMatrix<f64>,
    k: usize,
    max_iter: usize,
    engine: &dyn ClusteringEngine,
    rng: &mut R,
) -> Result<ClusteringOutcome> {
    let (n, d) = points.shape();
    info!(
        "Clustering {} points in {} dimension(s) into {} clusters with engine '{}'",
        n,
        d,
        k,
        engine.name()
    );

    let seeds = kmeans_pp_seed(points, k, rng)?;
    if seeds.has_duplicates() {
        debug!("Seeding produced duplicate centroids: {:?}", seeds.indices);
    }

    let labels = match engine.refine(points, &seeds.centroids, k, max_iter) {
        Some(labels) if labels.len() == n && labels.iter().all(|&l| l < k) => labels,
        Some(labels) => {
            warn!(
                "Engine '{}' returned {} labels for {} points or a label >= {}",
                engine.name(),
                labels.len(),
                n,
                k
            );
            return Ok(ClusteringOutcome::NoResult {
                engine: engine.name().to_string(),
            });
        }
        None => {
            warn!("Engine '{}' returned no result", engine.name());
            return Ok(ClusteringOutcome::NoResult {
                engine: engine.name().to_string(),
            });
        }
    };

    let partition = ClusterPartition::from_labels(&labels, k)?;
    debug!("Cluster sizes: {:?}", partition.sizes());

    Ok(ClusteringOutcome::Clustered {
        labels,
        partition,
        seeds,
    })
}

