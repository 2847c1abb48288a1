//! Stage 5: spectral embedding.
//!
//! Pipeline position: (Ā, Q̄) and k → T[N, k].
//!
//! U = the k columns of Q̄ paired with the k smallest diagonal entries of Ā,
//! in ascending eigenvalue order. T = U with every row scaled to unit ℓ2
//! norm. A row of U with zero norm stays a zero row in T.

use log::{debug, info, warn};
use ordered_float::OrderedFloat;
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::eigen::EigenResult;
use crate::error::{NscError, Result};

/// Row-normalised spectral embedding T [N, k].
#[derive(Debug, Clone)]
pub struct Embedding {
    pub matrix: DenseMatrix<f64>,

    /// Rows of U with zero norm, left as zero vectors in `matrix`.
    pub degenerate_rows: Vec<usize>,
}

impl Embedding {
    pub fn n_points(&self) -> usize {
        self.matrix.shape().0
    }

    /// Embedding dimension, equal to the number of clusters.
    pub fn k(&self) -> usize {
        self.matrix.shape().1
    }

    pub fn row(&self, i: usize) -> Vec<f64> {
        self.matrix.get_row(i).iterator(0).copied().collect()
    }
}

/// Indices that sort `values` ascending. Stable: equal eigenvalues keep
/// their column order.
pub fn ascending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by_key(|&i| OrderedFloat(values[i]));
    order
}

/// Project onto the k eigenvectors with the smallest eigenvalues and
/// row-normalise.
pub fn spectral_embedding(eigen: &EigenResult, k: usize) -> Result<Embedding> {
    let (n, ncols) = eigen.q.shape();
    if k == 0 || k > ncols {
        return Err(NscError::InvalidClusterCount { k, n });
    }

    let eigenvalues = eigen.eigenvalues();
    let order = ascending_order(&eigenvalues);
    let selected = &order[..k];

    info!("Spectral embedding: N={}, k={}", n, k);
    debug!(
        "Selected eigenvalues: {:?}",
        selected.iter().map(|&c| eigenvalues[c]).collect::<Vec<_>>()
    );

    let mut t = DenseMatrix::<f64>::zeros(n, k);
    let mut degenerate_rows = Vec::new();

    for i in 0..n {
        let u_row: Vec<f64> = selected.iter().map(|&c| *eigen.q.get((i, c))).collect();
        let norm = u_row.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            degenerate_rows.push(i);
            continue;
        }
        for (j, v) in u_row.iter().enumerate() {
            t.set((i, j), v / norm);
        }
    }

    if !degenerate_rows.is_empty() {
        warn!(
            "{} embedding row(s) with zero norm left as zero vectors: {:?}",
            degenerate_rows.len(),
            degenerate_rows
        );
    }

    Ok(Embedding {
        matrix: t,
        degenerate_rows,
    })
}
