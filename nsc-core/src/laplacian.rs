//! Stage 2: symmetric normalised graph Laplacian.
//!
//! Pipeline position: W[N, N] → L_sym[N, N].
//!
//!   deg_i = Σ_j w_ij
//!   L_sym = I − D^{-½} W D^{-½}
//!   L_sym[i, j] = δ_ij − (deg_i^{-½} · w_ij) · deg_j^{-½}
//!
//! Eigenvalues of L_sym lie in [0, 2]; the smallest is 0 with eigenvector
//! D^{½}·1 for every connected component.
//!
//! ### Isolated nodes
//! A node with zero degree has no finite D^{-½} entry. Such a node gets
//! D^{-½}_ii = 0: its row and column of D^{-½} W D^{-½} vanish and
//! L_sym[i, i] = 1. With the exponential kernel this only happens for N = 1
//! or when every distance from the node underflows `exp`.

use log::{debug, info, warn};
use smartcore::linalg::basic::arrays::{Array, Array2, ArrayView2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{NscError, Result};

/// Output of Stage 2.
#[derive(Debug, Clone)]
pub struct LaplacianOutput {
    /// L_sym [N, N].
    pub matrix: DenseMatrix<f64>,

    /// Degree vector deg_i = Σ_j w_ij [N].
    pub degrees: Vec<f64>,

    /// Nodes with zero degree (see module docs).
    pub isolated: Vec<usize>,
}

impl LaplacianOutput {
    pub fn n_nodes(&self) -> usize {
        self.degrees.len()
    }

    pub fn summary(&self) -> String {
        let (min, max) = self
            .degrees
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &d| {
                (lo.min(d), hi.max(d))
            });
        format!(
            "LaplacianOutput: N={}, degree range [{:.4}, {:.4}], isolated={}",
            self.n_nodes(),
            min,
            max,
            self.isolated.len()
        )
    }
}

/// Row sums of W.
pub fn degree_vector(w: &DenseMatrix<f64>) -> Vec<f64> {
    w.sum(1)
}

/// Diagonal of D^{-½}, with 0 for zero-degree nodes. Returns the entries and
/// the indices of the zero-degree nodes.
pub fn inverse_sqrt_degrees(degrees: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut isolated = Vec::new();
    let inv = degrees
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if d > 0.0 {
                d.powf(-0.5)
            } else {
                isolated.push(i);
                0.0
            }
        })
        .collect();
    (inv, isolated)
}

/// Build L_sym from a square weighted adjacency matrix.
pub fn normalized_laplacian(w: &DenseMatrix<f64>) -> Result<LaplacianOutput> {
    let (n, m) = w.shape();
    if n != m {
        return Err(NscError::DimensionMismatch {
            expected: n,
            got: m,
        });
    }
    if n == 0 {
        return Err(NscError::EmptyInput);
    }

    info!("Building normalised Laplacian L = I − D^-½ W D^-½ for {} nodes", n);

    let degrees = degree_vector(w);
    let (inv_sqrt, isolated) = inverse_sqrt_degrees(&degrees);

    if !isolated.is_empty() {
        warn!(
            "{} isolated node(s) with zero degree, D^-½ set to 0 for {:?}",
            isolated.len(),
            isolated
        );
    }

    let mut l = DenseMatrix::<f64>::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let scaled = inv_sqrt[i] * *w.get((i, j)) * inv_sqrt[j];
            let identity = if i == j { 1.0 } else { 0.0 };
            l.set((i, j), identity - scaled);
        }
    }

    let output = LaplacianOutput {
        matrix: l,
        degrees,
        isolated,
    };
    debug!("{}", output.summary());

    Ok(output)
}
