//! Stage A: spectral embedding of the generated points.

use log::info;
use nsc_core::{
    ClusterCount, EigenConfig, NormalizedSpectralClustering, PointSet, SpectralConfig,
    SpectralOutput,
};

use crate::error::PipelineResult;

pub struct SpectralStage {
    pub eigen: EigenConfig,
    /// `None` lets the eigengap heuristic choose k.
    pub fixed_k: Option<usize>,
}

impl SpectralStage {
    pub fn execute(&self, points: &PointSet) -> PipelineResult<SpectralOutput> {
        let cluster_count = match self.fixed_k {
            Some(k) => ClusterCount::Fixed(k),
            None => ClusterCount::Eigengap,
        };
        let nsc = NormalizedSpectralClustering::new(SpectralConfig {
            eigen: self.eigen,
            cluster_count,
        });

        let output = nsc.execute(points)?;
        info!(
            "✓ Stage A: embedding k={} (heuristic {:?})",
            output.k, output.heuristic_k
        );
        Ok(output)
    }
}
