use crate::matrix::from_rows;
use crate::similarity::{affinity, euclidean_distance, weighted_adjacency};
use crate::tests::{init, two_groups};
use crate::NscError;
use approx::assert_relative_eq;
use smartcore::linalg::basic::arrays::{Array, Array2};

#[test]
fn test_euclidean_distance() {
    assert_relative_eq!(euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]), 5.0);
    assert_eq!(euclidean_distance(&[1.5, -2.0, 7.0], &[1.5, -2.0, 7.0]), 0.0);
}

#[test]
fn test_affinity_kernel() {
    assert_eq!(affinity(0.0), 1.0);
    assert_relative_eq!(affinity(2.0), (-1.0f64).exp(), epsilon = 1e-15);
    assert!(affinity(1.0) > affinity(2.0));
}

#[test]
fn test_weighted_adjacency_structure() {
    init();
    let (points, _) = two_groups();
    let w = weighted_adjacency(&points).unwrap();
    let (n, m) = w.shape();
    assert_eq!((n, m), (6, 6));

    for i in 0..n {
        assert_eq!(*w.get((i, i)), 0.0, "diagonal must be zero at {}", i);
        for j in 0..n {
            assert_eq!(*w.get((i, j)), *w.get((j, i)), "W not symmetric at ({}, {})", i, j);
            if i != j {
                let v = *w.get((i, j));
                assert!(v > 0.0 && v < 1.0, "weight out of (0, 1): {}", v);
            }
        }
    }

    // 3-4-5 triangle between the first two points of a fresh set
    let p = from_rows(&[vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
    let w = weighted_adjacency(&p).unwrap();
    assert_relative_eq!(*w.get((0, 1)), (-2.5f64).exp(), epsilon = 1e-15);
}

#[test]
fn test_within_group_weights_dominate() {
    init();
    let (points, groups) = two_groups();
    let w = weighted_adjacency(&points).unwrap();

    let mut min_within = f64::INFINITY;
    let mut max_across: f64 = 0.0;
    for i in 0..6 {
        for j in 0..6 {
            if i == j {
                continue;
            }
            if groups[i] == groups[j] {
                min_within = min_within.min(*w.get((i, j)));
            } else {
                max_across = max_across.max(*w.get((i, j)));
            }
        }
    }
    assert!(min_within > max_across);
}

#[test]
fn test_single_point_yields_zero_matrix() {
    let p = from_rows(&[vec![4.0, 2.0, 1.0]]).unwrap();
    let w = weighted_adjacency(&p).unwrap();
    assert_eq!(w.shape(), (1, 1));
    assert_eq!(*w.get((0, 0)), 0.0);
}

#[test]
fn test_empty_input_rejected() {
    assert_eq!(from_rows(&[]).unwrap_err(), NscError::EmptyInput);
}

#[test]
fn test_ragged_rows_rejected() {
    let err = from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
    assert_eq!(
        err,
        NscError::DimensionMismatch {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_zero_width_rows_rejected() {
    assert!(matches!(
        from_rows(&[vec![], vec![]]).unwrap_err(),
        NscError::Matrix(_)
    ));
}

#[test]
fn test_from_rows_keeps_row_order() {
    let p = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(p.shape(), (2, 3));
    assert_eq!(*p.get((0, 2)), 3.0);
    assert_eq!(*p.get((1, 0)), 4.0);
    let second: Vec<f64> = p.get_row(1).iterator(0).copied().collect();
    assert_eq!(second, vec![4.0, 5.0, 6.0]);
}
