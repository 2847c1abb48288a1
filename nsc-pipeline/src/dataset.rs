//! Isotropic Gaussian blobs with known labels.
//!
//! k centers uniform in [-10, 10]^d, unit standard deviation around each.
//! N is split as evenly as possible: the first `N mod k` centers get one
//! extra point. Points are shuffled before returning, labels follow them.

use log::{debug, info};
use nsc_core::matrix::from_rows;
use nsc_core::PointSet;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{PipelineError, PipelineResult};

pub const CENTER_BOX: (f64, f64) = (-10.0, 10.0);
pub const CLUSTER_STD: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Blobs {
    pub points: PointSet,
    /// Ground-truth label of each point, `< k`.
    pub labels: Vec<usize>,
    pub centers: Vec<Vec<f64>>,
}

/// Points per center, first `n mod k` centers one larger.
pub fn blob_sizes(n: usize, k: usize) -> Vec<usize> {
    (0..k).map(|c| n / k + usize::from(c < n % k)).collect()
}

pub fn make_blobs<R: Rng + ?Sized>(
    n: usize,
    k: usize,
    dimension: usize,
    rng: &mut R,
) -> PipelineResult<Blobs> {
    if n == 0 || k == 0 || dimension == 0 {
        return Err(PipelineError::Dataset(format!(
            "n, k and dimension must be positive (n={}, k={}, d={})",
            n, k, dimension
        )));
    }

    info!("Generating {} points in {} blob(s), d={}", n, k, dimension);

    let uniform = Uniform::new(CENTER_BOX.0, CENTER_BOX.1)
        .map_err(|e| PipelineError::Dataset(e.to_string()))?;
    let noise =
        Normal::new(0.0, CLUSTER_STD).map_err(|e| PipelineError::Dataset(e.to_string()))?;

    let centers: Vec<Vec<f64>> = (0..k)
        .map(|_| (0..dimension).map(|_| uniform.sample(rng)).collect())
        .collect();

    let mut samples: Vec<(Vec<f64>, usize)> = Vec::with_capacity(n);
    for (label, (center, size)) in centers.iter().zip(blob_sizes(n, k)).enumerate() {
        for _ in 0..size {
            let point = center.iter().map(|c| c + noise.sample(rng)).collect();
            samples.push((point, label));
        }
    }
    samples.shuffle(rng);

    let (rows, labels): (Vec<Vec<f64>>, Vec<usize>) = samples.into_iter().unzip();
    let points = from_rows(&rows)?;

    debug!("Blob sizes: {:?}", blob_sizes(n, k));
    Ok(Blobs {
        points,
        labels,
        centers,
    })
}
