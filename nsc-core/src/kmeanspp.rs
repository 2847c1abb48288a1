//! K-means++ seeding.
//!
//! ```text
//! c₀ ~ Uniform(0..N)
//! D_i = +∞
//! for j in 1..K:
//!     D_i = min(D_i, ‖p_i − c_{j-1}‖²)
//!     c_j ~ P(i) = D_i / Σ D
//! ```
//!
//! When Σ D is zero (every point coincides with a chosen centroid) the
//! next index is drawn uniformly instead. Already-chosen points carry zero
//! weight, but nothing forbids picking one again through the uniform
//! fallback, so `CentroidSet::indices` may contain duplicates.
//!
//! The caller owns the random generator; seeding a fresh
//! `StdRng::seed_from_u64(seed)` per call makes the result reproducible.

use log::{debug, trace};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{NscError, Result};

/// Seeded centroids [K, d] and the source row of each, in pick order.
#[derive(Debug, Clone)]
pub struct CentroidSet {
    pub centroids: DenseMatrix<f64>,
    pub indices: Vec<usize>,
}

impl CentroidSet {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn has_duplicates(&self) -> bool {
        let mut seen = self.indices.clone();
        seen.sort_unstable();
        seen.windows(2).any(|w| w[0] == w[1])
    }
}

pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Pick `k` initial centroids from the rows of `points`.
pub fn kmeans_pp_seed<R: Rng + ?Sized>(
    points: &DenseMatrix<f64>,
    k: usize,
    rng: &mut R,
) -> Result<CentroidSet> {
    let (n, d) = points.shape();
    if n == 0 {
        return Err(NscError::EmptyInput);
    }
    if k == 0 || k > n {
        return Err(NscError::InvalidClusterCount { k, n });
    }

    debug!("K-means++ seeding: N={}, d={}, K={}", n, d, k);

    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| points.get_row(i).iterator(0).copied().collect())
        .collect();
    let mut indices = Vec::with_capacity(k);
    indices.push(rng.random_range(0..n));

    let mut nearest = vec![f64::INFINITY; n];
    for j in 1..k {
        let newest = &rows[indices[j - 1]];
        for (dist, p) in nearest.iter_mut().zip(rows.iter()) {
            *dist = dist.min(squared_distance(p, newest));
        }

        let next = match WeightedIndex::new(&nearest) {
            Ok(weights) => weights.sample(rng),
            Err(e) => {
                trace!("K-means++ step {}: {} – sampling uniformly", j, e);
                rng.random_range(0..n)
            }
        };

        if indices.contains(&next) {
            debug!("K-means++ step {}: index {} picked twice", j, next);
        }
        indices.push(next);
    }

    let mut centroids = DenseMatrix::<f64>::zeros(k, d);
    for (j, &i) in indices.iter().enumerate() {
        for (c, &v) in rows[i].iter().enumerate() {
            centroids.set((j, c), v);
        }
    }

    trace!("K-means++ picked indices {:?}", indices);
    Ok(CentroidSet { centroids, indices })
}

/// Seeder owning a fixed seed: every call to [`KMeansPlusPlus::seed`] starts
/// from a fresh `StdRng::seed_from_u64(seed)`, so repeated calls agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KMeansPlusPlus {
    pub seed: u64,
}

impl Default for KMeansPlusPlus {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

impl KMeansPlusPlus {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    pub fn seed(&self, points: &DenseMatrix<f64>, k: usize) -> Result<CentroidSet> {
        kmeans_pp_seed(points, k, &mut self.rng())
    }
}
