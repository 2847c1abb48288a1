use thiserror::Error;

/// Failures surfaced by the numeric pipeline.
///
/// Numerical degeneracies (zero-norm columns, zero-norm embedding rows,
/// isolated graph nodes) and eigensolver non-convergence are not errors:
/// they are handled in place and logged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NscError {
    #[error("point set is empty")]
    EmptyInput,

    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("invalid cluster count k={k} for {n} points")]
    InvalidClusterCount { k: usize, n: usize },

    #[error("eigengap undefined for a spectrum of {n} eigenvalues")]
    EigengapUndefined { n: usize },

    /// Neither partition contains a co-clustered pair, so the Jaccard
    /// denominator is zero.
    #[error("jaccard measure undefined: no co-clustered pairs in either partition")]
    DegenerateJaccard,

    #[error("cluster label {label} out of range for k={k}")]
    LabelOutOfRange { label: usize, k: usize },

    #[error("matrix construction failed: {0}")]
    Matrix(String),
}

pub type Result<T> = std::result::Result<T, NscError>;
