//! Stage 1: dense similarity graph.
//!
//! Pipeline position: points [N, D] → W[N, N].
//!
//! Fully connected graph, no k-NN truncation and no weight threshold:
//!   w_ij = exp(-‖p_i − p_j‖₂ / 2)   for i ≠ j
//!   w_ii = 0

use log::{debug, info};
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{NscError, Result};
use crate::matrix::PointSet;

/// Euclidean distance between two points of equal dimension.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Edge weight for a pair at the given distance.
pub fn affinity(distance: f64) -> f64 {
    (-distance / 2.0).exp()
}

/// Build the weighted adjacency matrix W of a point set.
///
/// The distance for each unordered pair is computed once, so W is exactly
/// symmetric. A single point yields the 1×1 zero matrix.
pub fn weighted_adjacency(points: &PointSet) -> Result<DenseMatrix<f64>> {
    let (n, d) = points.shape();
    if n == 0 {
        return Err(NscError::EmptyInput);
    }

    info!("Building dense similarity graph: {} points × {} dims", n, d);

    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| points.get_row(i).iterator(0).copied().collect())
        .collect();
    let mut w = DenseMatrix::<f64>::zeros(n, n);
    let mut min_w = f64::INFINITY;
    let mut max_w: f64 = 0.0;

    for i in 0..n {
        for j in (i + 1)..n {
            let weight = affinity(euclidean_distance(&rows[i], &rows[j]));
            w.set((i, j), weight);
            w.set((j, i), weight);
            min_w = min_w.min(weight);
            max_w = max_w.max(weight);
        }
    }

    if n > 1 {
        debug!(
            "Similarity graph: {} edges, weight range [{:.3e}, {:.3e}]",
            n * (n - 1) / 2,
            min_w,
            max_w
        );
    }

    Ok(w)
}
