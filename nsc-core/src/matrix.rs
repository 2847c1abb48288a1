//! `smartcore` dense storage plus the two residual norms the eigensolver
//! and its tests need.

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{NscError, Result};

/// N points of dimension D, one point per row.
pub type PointSet = DenseMatrix<f64>;

/// Build a matrix from equally sized rows.
///
/// `DenseMatrix::from_2d_vec` trusts the first row's width, so ragged input
/// is rejected here first.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>> {
    let Some(first) = rows.first() else {
        return Err(NscError::EmptyInput);
    };
    let ncols = first.len();
    if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
        return Err(NscError::DimensionMismatch {
            expected: ncols,
            got: bad.len(),
        });
    }

    DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| NscError::Matrix(e.to_string()))
}

/// Largest elementwise `|a_ij − b_ij|`. Shapes must match.
pub fn max_abs_diff(a: &DenseMatrix<f64>, b: &DenseMatrix<f64>) -> f64 {
    let (nrows, ncols) = a.shape();
    debug_assert_eq!((nrows, ncols), b.shape());

    let mut worst: f64 = 0.0;
    for i in 0..nrows {
        for j in 0..ncols {
            worst = worst.max((*a.get((i, j)) - *b.get((i, j))).abs());
        }
    }
    worst
}

/// Largest off-diagonal magnitude of a square matrix.
pub fn max_off_diagonal(m: &DenseMatrix<f64>) -> f64 {
    let (nrows, ncols) = m.shape();
    let mut worst: f64 = 0.0;
    for i in 0..nrows {
        for j in 0..ncols {
            if i != j {
                worst = worst.max(m.get((i, j)).abs());
            }
        }
    }
    worst
}
