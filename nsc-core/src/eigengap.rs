//! Stage 4: eigengap heuristic for the number of clusters.
//!
//! With the spectrum sorted ascending as `ev[0..N]`, scan the lower half
//! `i ∈ 1..=⌊N/2⌋` and return the `i` maximising `ev[i+1] − ev[i]`.
//! Ties keep the first `i` (strict `>`).
//!
//! Note the window compares `ev[i+1]` against `ev[i]`, starting at `i = 1`,
//! so the gap between the two smallest eigenvalues is never considered and
//! the returned value is the position of the lower eigenvalue of the gap.

use log::debug;
use ordered_float::OrderedFloat;

use crate::error::{NscError, Result};

/// Copy of `values` sorted ascending. NaN sorts last.
pub fn sorted_ascending(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by_key(|&v| OrderedFloat(v));
    sorted
}

/// Select k from an unsorted spectrum.
///
/// Fails when the window holds no comparable pair (N ≤ 2).
pub fn eigen_gap(eigenvalues: &[f64]) -> Result<usize> {
    let n = eigenvalues.len();
    let ev = sorted_ascending(eigenvalues);

    let mut best_gap = -1.0;
    let mut best_k = None;
    for i in 1..=(n / 2) {
        if i + 1 >= n {
            break;
        }
        let gap = ev[i + 1] - ev[i];
        if gap > best_gap {
            best_gap = gap;
            best_k = Some(i);
        }
    }

    match best_k {
        Some(k) => {
            debug!("Eigengap heuristic: k={} (gap {:.4e})", k, best_gap);
            Ok(k)
        }
        None => Err(NscError::EigengapUndefined { n }),
    }
}
