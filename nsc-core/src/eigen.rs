//! Stage 3: full eigen-decomposition of a symmetric matrix by QR iteration.
//!
//! Pipeline position: L_sym[N, N] → (Ā, Q̄) with diag(Ā) ≈ eigenvalues and
//! the columns of Q̄ ≈ the matching eigenvectors.
//!
//! ```text
//! A₀ = M, Q̄ = I
//! repeat (at most N times):
//!     A_t = Q_t R_t              modified Gram-Schmidt
//!     A_{t+1} = R_t Q_t          similarity transform, same spectrum
//!     Q̄' = Q̄ Q_t
//!     if max_ij | |Q̄_ij| − |Q̄'_ij| | ≤ ε: return (A_{t+1}, Q̄)
//!     Q̄ = Q̄'
//! return (A_N, Q̄)
//! ```
//!
//! The convergence test compares magnitudes so that a column flipping sign
//! between two iterations still counts as converged. Exhausting the budget is
//! not an error: the last iterate is returned and flagged as not converged.
//!
//! Diagonal entries come out in the order QR iteration settles them
//! (roughly by decreasing magnitude), not sorted.

use log::{debug, info, trace};
use smartcore::linalg::basic::arrays::{Array, Array2, ArrayView2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{NscError, Result};
use crate::matrix::max_off_diagonal;

/// Configuration for the QR eigensolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenConfig {
    /// Convergence threshold on the elementwise change of |Q̄|.
    pub epsilon: f64,

    /// Iteration budget. `None` caps the loop at the matrix dimension N.
    pub max_iterations: Option<usize>,
}

impl Default for EigenConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-4,
            max_iterations: None,
        }
    }
}

/// Output of Stage 3.
#[derive(Debug, Clone)]
pub struct EigenResult {
    /// Ā: near-diagonal, diagonal entries approximate the eigenvalues.
    pub a: DenseMatrix<f64>,

    /// Q̄: accumulated orthogonal matrix, column j pairs with Ā[j, j].
    pub q: DenseMatrix<f64>,

    /// Number of QR steps performed.
    pub iterations: usize,

    /// Whether the |Q̄| change fell below ε before the budget ran out.
    pub converged: bool,
}

impl EigenResult {
    /// diag(Ā), unsorted.
    pub fn eigenvalues(&self) -> Vec<f64> {
        self.a.diag()
    }

    /// Column `j` of Q̄.
    pub fn eigenvector(&self, j: usize) -> Vec<f64> {
        self.q.get_col(j).iterator(0).copied().collect()
    }

    /// Largest off-diagonal magnitude left in Ā.
    pub fn off_diagonal_residual(&self) -> f64 {
        max_off_diagonal(&self.a)
    }
}

/// Modified Gram-Schmidt QR factorisation, `U = Q·R`.
///
/// Column-by-column, right-looking: once `Q[:, i]` is known every later
/// column is immediately deflated against it. `U` is consumed; its columns
/// are copied out once and deflated in place. A column whose residual norm
/// is exactly zero yields a zero column in `Q` and a zero diagonal entry in `R`.
///
/// For `U` of shape [n, m] returns column-major `Q` [n, m] and
/// upper-triangular `R` [m, m].
pub fn gram_schmidt(u: DenseMatrix<f64>) -> (DenseMatrix<f64>, DenseMatrix<f64>) {
    let (n, m) = u.shape();
    let mut columns: Vec<Vec<f64>> = (0..m)
        .map(|j| u.get_col(j).iterator(0).copied().collect())
        .collect();
    let mut r = DenseMatrix::<f64>::zeros(m, m);

    for i in 0..m {
        let (done, rest) = columns.split_at_mut(i + 1);
        let qi = &mut done[i];

        let norm = qi.iter().map(|v| v * v).sum::<f64>().sqrt();
        r.set((i, i), norm);

        if norm == 0.0 {
            trace!("gram_schmidt: column {} has zero residual, Q[:, {}] = 0", i, i);
            qi.iter_mut().for_each(|v| *v = 0.0);
        } else {
            qi.iter_mut().for_each(|v| *v /= norm);
        }

        for (offset, uj) in rest.iter_mut().enumerate() {
            let proj: f64 = qi.iter().zip(uj.iter()).map(|(a, b)| a * b).sum();
            r.set((i, i + 1 + offset), proj);
            uj.iter_mut()
                .zip(qi.iter())
                .for_each(|(x, q)| *x -= proj * q);
        }
    }

    let q = DenseMatrix::<f64>::from_iterator(columns.into_iter().flatten(), n, m, 1);
    (q, r)
}

/// Largest elementwise change in magnitude, `max_ij | |a_ij| − |b_ij| |`.
pub fn max_magnitude_change(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> f64 {
    let (nrows, ncols) = a.shape();
    let mut worst: f64 = 0.0;
    for i in 0..nrows {
        for j in 0..ncols {
            let delta = (a.get((i, j)).abs() - b.get((i, j)).abs()).abs();
            worst = worst.max(delta);
        }
    }
    worst
}

/// Eigen-decompose a symmetric matrix by QR iteration.
///
/// Only non-square input is rejected; non-convergence returns the best
/// iterate with `converged == false`.
pub fn qr_iteration(m: &DenseMatrix<f64>, config: &EigenConfig) -> Result<EigenResult> {
    let (n, ncols) = m.shape();
    if n != ncols {
        return Err(NscError::DimensionMismatch {
            expected: n,
            got: ncols,
        });
    }

    let budget = config.max_iterations.unwrap_or(n);
    info!(
        "QR iteration on {}×{} matrix: ε={:.1e}, budget={} iterations",
        n, n, config.epsilon, budget
    );

    let mut a = m.clone();
    let mut q_acc = DenseMatrix::<f64>::eye(n);

    for t in 0..budget {
        let (q, r) = gram_schmidt(a);
        a = r.matmul(&q);
        let next = q_acc.matmul(&q);

        let change = max_magnitude_change(&q_acc, &next);
        trace!("QR step {}: max |Q̄| change = {:.3e}", t + 1, change);

        if change <= config.epsilon {
            debug!(
                "QR iteration converged after {} step(s), off-diagonal residual {:.3e}",
                t + 1,
                max_off_diagonal(&a)
            );
            return Ok(EigenResult {
                a,
                q: q_acc,
                iterations: t + 1,
                converged: true,
            });
        }
        q_acc = next;
    }

    debug!(
        "QR iteration stopped at budget {} without converging, off-diagonal residual {:.3e}",
        budget,
        max_off_diagonal(&a)
    );

    Ok(EigenResult {
        a,
        q: q_acc,
        iterations: budget,
        converged: false,
    })
}
