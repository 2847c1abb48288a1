use crate::eigen::{gram_schmidt, max_magnitude_change, qr_iteration, EigenConfig};
use crate::eigengap::sorted_ascending;
use crate::matrix::{from_rows, max_abs_diff};
use crate::tests::init;
use crate::NscError;
use approx::assert_relative_eq;
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

fn symmetric_3x3() -> DenseMatrix<f64> {
    from_rows(&[
        vec![2.0, 1.0, 0.0],
        vec![1.0, 2.0, 0.0],
        vec![0.0, 0.0, 3.0],
    ])
    .unwrap()
}

/// max_j ‖M·q_j − λ_j·q_j‖_∞
fn eigenpair_residual(m: &DenseMatrix<f64>, q: &DenseMatrix<f64>, values: &[f64]) -> f64 {
    let mq = m.matmul(q);
    let (n, k) = q.shape();
    let mut worst: f64 = 0.0;
    for j in 0..k {
        for i in 0..n {
            worst = worst.max((*mq.get((i, j)) - values[j] * *q.get((i, j))).abs());
        }
    }
    worst
}

// ═══════════════════════════════════════════════════════════════════════
// GRAM-SCHMIDT
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_gram_schmidt_reconstructs_and_orthonormal() {
    init();
    let u = from_rows(&[
        vec![4.0, 1.0, 2.0],
        vec![1.0, 3.0, 0.5],
        vec![2.0, 0.5, 5.0],
        vec![0.0, 1.0, 1.0],
    ])
    .unwrap();

    let (q, r) = gram_schmidt(u.clone());
    assert_eq!(q.shape(), (4, 3));
    assert_eq!(r.shape(), (3, 3));

    assert!(max_abs_diff(&q.matmul(&r), &u) < 1e-12, "QR != U");
    assert!(
        max_abs_diff(&q.ab(true, &q, false), &DenseMatrix::eye(3)) < 1e-12,
        "QᵗQ != I"
    );

    // R is upper triangular with a non-negative diagonal
    for i in 0..3 {
        assert!(*r.get((i, i)) >= 0.0);
        for j in 0..i {
            assert_eq!(*r.get((i, j)), 0.0);
        }
    }
}

#[test]
fn test_gram_schmidt_zero_column() {
    init();
    let u = from_rows(&[
        vec![1.0, 0.0, 2.0],
        vec![2.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0],
    ])
    .unwrap();

    let (q, r) = gram_schmidt(u.clone());

    assert!(max_abs_diff(&q.matmul(&r), &u) < 1e-12);

    // Surviving columns stay orthonormal, the zeroed one contributes nothing
    let mut expected = DenseMatrix::<f64>::eye(3);
    expected.set((1, 1), 0.0);
    assert!(
        max_abs_diff(&q.ab(true, &q, false), &expected) < 1e-12,
        "QᵗQ != diag(1, 0, 1)"
    );
    assert_eq!(*r.get((1, 1)), 0.0);
    for t in 0..3 {
        assert_eq!(*q.get((t, 1)), 0.0, "zero column must stay zero");
        assert!(q.get((t, 2)).is_finite());
    }
}

#[test]
fn test_gram_schmidt_larger_matrix() {
    init();
    let n = 80;
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| {
                    let off = 1.0 / (1.0 + (i as f64 - j as f64).abs());
                    if i == j {
                        off + n as f64
                    } else {
                        off
                    }
                })
                .collect()
        })
        .collect();
    let u = from_rows(&rows).unwrap();

    let (q, r) = gram_schmidt(u.clone());
    assert_eq!(q.shape(), (n, n));
    assert!(max_abs_diff(&q.matmul(&r), &u) < 1e-9);
    assert!(max_abs_diff(&q.ab(true, &q, false), &DenseMatrix::eye(n)) < 1e-9);
}

#[test]
fn test_max_magnitude_change_ignores_sign() {
    let a = from_rows(&[vec![1.0, -0.5], vec![0.25, 2.0]]).unwrap();
    let b = from_rows(&[vec![-1.0, 0.5], vec![-0.25, -2.0]]).unwrap();
    assert_eq!(max_magnitude_change(&a, &b), 0.0);

    let c = from_rows(&[vec![1.0, -0.5], vec![0.75, 2.0]]).unwrap();
    assert_relative_eq!(max_magnitude_change(&a, &c), 0.5);
}

// ═══════════════════════════════════════════════════════════════════════
// QR ITERATION
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_qr_iteration_diagonal_converges_immediately() {
    init();
    let m = from_rows(&[
        vec![3.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 2.0],
    ])
    .unwrap();

    let result = qr_iteration(&m, &EigenConfig::default()).unwrap();

    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.eigenvalues(), vec![3.0, 1.0, 2.0]);
    assert!(max_abs_diff(&result.q, &DenseMatrix::eye(3)) < 1e-12);
    assert_eq!(result.eigenvector(1), vec![0.0, 1.0, 0.0]);
    assert_eq!(result.off_diagonal_residual(), 0.0);
}

#[test]
fn test_qr_iteration_symmetric_3x3() {
    init();
    let m = symmetric_3x3();
    let config = EigenConfig {
        max_iterations: Some(500),
        ..Default::default()
    };

    let result = qr_iteration(&m, &config).unwrap();
    assert!(result.converged);
    assert!(result.iterations < 500);

    let values = result.eigenvalues();
    let sorted = sorted_ascending(&values);
    assert_relative_eq!(sorted[0], 1.0, epsilon = 1e-3);
    assert_relative_eq!(sorted[1], 3.0, epsilon = 1e-3);
    assert_relative_eq!(sorted[2], 3.0, epsilon = 1e-3);

    assert!(result.off_diagonal_residual() < 1e-3);
    assert!(eigenpair_residual(&m, &result.q, &values) < 1e-3);
    assert!(max_abs_diff(&result.q.ab(true, &result.q, false), &DenseMatrix::eye(3)) < 1e-9);
}

#[test]
fn test_qr_iteration_tridiagonal() {
    init();
    // Eigenvalues 3 − √3, 3, 3 + √3
    let m = from_rows(&[
        vec![4.0, 1.0, 0.0],
        vec![1.0, 3.0, 1.0],
        vec![0.0, 1.0, 2.0],
    ])
    .unwrap();
    let config = EigenConfig {
        max_iterations: Some(500),
        ..Default::default()
    };

    let result = qr_iteration(&m, &config).unwrap();
    assert!(result.converged);

    let sorted = sorted_ascending(&result.eigenvalues());
    let root3 = 3.0f64.sqrt();
    assert_relative_eq!(sorted[0], 3.0 - root3, epsilon = 1e-3);
    assert_relative_eq!(sorted[1], 3.0, epsilon = 1e-3);
    assert_relative_eq!(sorted[2], 3.0 + root3, epsilon = 1e-3);
}

#[test]
fn test_qr_iteration_budget_defaults_to_dimension() {
    init();
    // The default cap of N = 3 steps is too short for this matrix
    let result = qr_iteration(&symmetric_3x3(), &EigenConfig::default()).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 3);

    // The spectrum is preserved by every similarity step
    let trace: f64 = result.eigenvalues().iter().sum();
    assert_relative_eq!(trace, 7.0, epsilon = 1e-12);
}

#[test]
fn test_qr_iteration_rejects_non_square() {
    let m = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(
        qr_iteration(&m, &EigenConfig::default()).unwrap_err(),
        NscError::DimensionMismatch {
            expected: 2,
            got: 3
        }
    );
}
