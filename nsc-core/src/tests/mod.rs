mod test_eigen;
mod test_jaccard;
mod test_similarity;

use crate::matrix::{from_rows, PointSet};

/// Initialize logging for tests
pub(crate) fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Two well separated groups of three points in the plane.
pub(crate) fn two_groups() -> (PointSet, Vec<usize>) {
    let points = from_rows(&[
        vec![1.0, 1.0],
        vec![1.5, 1.2],
        vec![1.2, 1.8],
        vec![5.0, 5.0],
        vec![5.6, 5.2],
        vec![5.1, 5.7],
    ])
    .unwrap();
    (points, vec![0, 0, 0, 1, 1, 1])
}
