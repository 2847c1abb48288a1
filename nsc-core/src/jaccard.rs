//! Pairwise Jaccard measure between a ground-truth and an empirical partition.
//!
//! Over unordered point pairs:
//!
//! ```text
//! both   = pairs co-clustered in both partitions
//! real   = pairs co-clustered in the ground truth
//! emp    = pairs co-clustered in the empirical partition
//! J      = both / (real + emp − both)
//! ```
//!
//! `both` is counted by crossing each ground-truth cluster with the empirical
//! labels, so the cost is O(N·k) rather than O(N²).

use log::debug;

use crate::error::{NscError, Result};
use crate::partition::ClusterPartition;

/// Unordered pairs within a group of `size` members.
pub fn pairs(size: u64) -> u64 {
    size * size.saturating_sub(1) / 2
}

/// Round to `digits` decimals, exact halves to even.
///
/// The decision is made on the exact binary value of `value`: a product
/// `value·scale` that only lands on `.5` through rounding is pushed to the
/// side its residual points at.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let scaled = value * scale;
    let residual = value.mul_add(scale, -scaled);

    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 && residual != 0.0 {
        if residual > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };
    rounded / scale
}

/// Jaccard measure rounded to three decimals.
///
/// `real[i]` and `empirical[i]` are the labels of point i; `clusters_empirical`
/// is the empirical partition as index sets. All labels must be `< k`.
/// Fails with [`NscError::DegenerateJaccard`] when no pair is co-clustered in
/// either partition.
pub fn jaccard_measure(
    real: &[usize],
    empirical: &[usize],
    clusters_empirical: &[Vec<usize>],
    k: usize,
) -> Result<f64> {
    if real.len() != empirical.len() {
        return Err(NscError::DimensionMismatch {
            expected: real.len(),
            got: empirical.len(),
        });
    }

    let clusters_real = ClusterPartition::from_labels(real, k)?;

    let mut numerator: u64 = 0;
    let mut denominator: u64 = 0;

    for cluster in clusters_real.clusters() {
        let mut count = vec![0u64; k];
        for &p in cluster {
            let label = empirical[p];
            let slot = count
                .get_mut(label)
                .ok_or(NscError::LabelOutOfRange { label, k })?;
            *slot += 1;
        }
        numerator += count.iter().map(|&c| pairs(c)).sum::<u64>();
        denominator += pairs(cluster.len() as u64);
    }
    for cluster in clusters_empirical {
        denominator += pairs(cluster.len() as u64);
    }
    denominator -= numerator;

    if denominator == 0 {
        return Err(NscError::DegenerateJaccard);
    }

    let score = round_to(numerator as f64 / denominator as f64, 3);
    debug!(
        "Jaccard: {} agreeing pairs / {} co-clustered pairs = {:.3}",
        numerator, denominator, score
    );
    Ok(score)
}

/// [`jaccard_measure`] over two partitions of the same points, scored with
/// `max(real.k, empirical.k)` labels.
pub fn jaccard_between(real: &ClusterPartition, empirical: &ClusterPartition) -> Result<f64> {
    let k = real.k().max(empirical.k());
    jaccard_measure(
        &real.labels(),
        &empirical.labels(),
        empirical.clusters(),
        k,
    )
}
