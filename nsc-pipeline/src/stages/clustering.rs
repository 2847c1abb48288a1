//! Stage B: K-means++ seeding and refinement of one point set.
//!
//! Runs twice per comparison: once on the spectral embedding [N, k] and once
//! on the raw points [N, d]. Both runs draw from a fresh generator seeded
//! with the same value, so each is reproducible on its own.

use log::{debug, info};
use nsc_core::engine::seed_and_refine;
use nsc_core::{ClusterPartition, ClusteringEngine, ClusteringOutcome, KMeansPlusPlus, PointSet};
use smartcore::linalg::basic::arrays::Array;

use crate::error::{PipelineError, PipelineResult};

pub struct ClusteringStage {
    pub max_iter: usize,
    pub seed: u64,
}

/// Labels and index sets of one clustering.
#[derive(Debug, Clone)]
pub struct ClusteringOutput {
    pub labels: Vec<usize>,
    pub partition: ClusterPartition,
    pub seed_indices: Vec<usize>,
}

impl ClusteringStage {
    pub fn execute(
        &self,
        label: &str,
        points: &PointSet,
        k: usize,
        engine: &dyn ClusteringEngine,
    ) -> PipelineResult<ClusteringOutput> {
        let (n, d) = points.shape();
        info!("🎯 {}: clustering {} items (d={}) into {} clusters", label, n, d, k);

        let mut rng = KMeansPlusPlus::with_seed(self.seed).rng();
        match seed_and_refine(points, k, self.max_iter, engine, &mut rng)? {
            ClusteringOutcome::Clustered {
                labels,
                partition,
                seeds,
            } => {
                debug!("{}: seeded from indices {:?}", label, seeds.indices);
                info!(
                    "✓ {}: {} non-empty cluster(s) of {}",
                    label,
                    partition.non_empty(),
                    k
                );
                Ok(ClusteringOutput {
                    labels,
                    partition,
                    seed_indices: seeds.indices,
                })
            }
            ClusteringOutcome::NoResult { engine } => Err(PipelineError::NoResult {
                stage: label.to_string(),
                engine,
            }),
        }
    }
}
