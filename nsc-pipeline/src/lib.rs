//! Comparison runs: Normalized Spectral Clustering against plain K-means on
//! generated Gaussian blobs.
//!
//! 1. Plan + data: resolve N, k, d and draw the blobs
//! 2. Stage A: spectral embedding (k fixed, or from the eigengap)
//! 3. Stage B: K-means++ + engine on the embedding, then on the raw points
//! 4. Jaccard of both against the ground truth
//! 5. Artifacts and report
pub mod config;
pub mod dataset;
pub mod error;
pub mod persist;
pub mod report;
pub mod stages;

pub use config::{RunConfig, RunPlan};
pub use error::{PipelineError, PipelineResult};
pub use report::RunReport;

use log::info;
use nsc_core::jaccard::jaccard_between;
use nsc_core::{ClusterPartition, ClusteringEngine, EigenConfig, LloydEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dataset::{make_blobs, Blobs};
use crate::persist::persist;
use crate::stages::clustering::ClusteringStage;
use crate::stages::spectral::SpectralStage;

/// Run with the built-in Lloyd engine.
pub fn run(config: &RunConfig) -> PipelineResult<RunReport> {
    run_with_engine(config, &LloydEngine)
}

/// Validate, plan, generate the data, then run every stage with `engine`.
pub fn run_with_engine(
    config: &RunConfig,
    engine: &dyn ClusteringEngine,
) -> PipelineResult<RunReport> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let plan = config.plan(&mut rng);
    let blobs = make_blobs(plan.n, plan.k, plan.dimension, &mut rng)?;

    execute_stages(config, &plan, &blobs, engine)
}

/// Stages A and B plus scoring and output on already generated data.
pub fn execute_stages(
    config: &RunConfig,
    plan: &RunPlan,
    blobs: &Blobs,
    engine: &dyn ClusteringEngine,
) -> PipelineResult<RunReport> {
    info!("🚀 Starting spectral vs K-means comparison ({})", engine.name());

    // Stage A: spectral embedding
    let spectral = SpectralStage {
        eigen: EigenConfig {
            epsilon: config.epsilon,
            max_iterations: config.eigen_max_iterations,
        },
        fixed_k: (!config.random).then_some(plan.k),
    }
    .execute(&blobs.points)?;
    let used_k = spectral.k;

    // Stage B: the same seeding and engine on both representations
    let clustering = ClusteringStage {
        max_iter: config.max_iter,
        seed: config.seed,
    };
    let nsc = clustering.execute(
        "spectral",
        &spectral.embedding.matrix,
        used_k,
        engine,
    )?;
    let kmeans = clustering.execute("kmeans", &blobs.points, used_k, engine)?;

    // Scored with max(generator k, used k) labels
    let truth = ClusterPartition::from_labels(&blobs.labels, plan.k)?;
    let jaccard_spectral = jaccard_between(&truth, &nsc.partition)?;
    let jaccard_kmeans = jaccard_between(&truth, &kmeans.partition)?;
    info!(
        "Jaccard: spectral={:.3}, kmeans={:.3}",
        jaccard_spectral, jaccard_kmeans
    );

    let artifacts = match &config.output_dir {
        Some(dir) => Some(persist(
            dir,
            &blobs.points,
            &blobs.labels,
            used_k,
            &nsc.partition,
            &kmeans.partition,
        )?),
        None => None,
    };

    let report = RunReport {
        n: plan.n,
        generator_k: plan.k,
        used_k,
        heuristic_k: spectral.heuristic_k,
        dimension: plan.dimension,
        random: config.random,
        jaccard_spectral,
        jaccard_kmeans,
        eigen_iterations: spectral.iterations,
        eigen_converged: spectral.converged,
        spectral_sizes: nsc.partition.sizes(),
        kmeans_sizes: kmeans.partition.sizes(),
        artifacts,
    };

    if let Some(path) = &config.report_json {
        report.write_json(path)?;
        info!("Report written to {}", path.display());
    }

    info!("✓ Comparison complete");
    Ok(report)
}

#[cfg(test)]
mod tests;
