//! Run configuration.
//!
//! A [`RunConfig`] is what the user asks for; [`RunConfig::plan`] turns it
//! into the concrete [`RunPlan`] (N, generator k, dimension) after drawing
//! whatever the configuration leaves open from the run's random generator.

use std::path::PathBuf;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, PipelineResult};

/// Random-mode bounds per dimension: N and k are drawn from
/// `[max / 2, max]`.
pub const MAX_N_2D: usize = 500;
pub const MAX_K_2D: usize = 20;
pub const MAX_N_3D: usize = 500;
pub const MAX_K_3D: usize = 20;

pub const DEFAULT_EPSILON: f64 = 1e-4;
pub const DEFAULT_MAX_ITER: usize = 300;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of points (ignored in random mode).
    pub n: usize,

    /// Generator cluster count, also the k used by both algorithms
    /// (ignored in random mode).
    pub k: usize,

    /// Point dimension. `None` draws 2 or 3.
    pub dimension: Option<usize>,

    /// Draw N and k, and let the eigengap heuristic choose the k used.
    pub random: bool,

    /// Seed for data generation and for K-means++ seeding.
    pub seed: u64,

    /// Lloyd iteration cap.
    pub max_iter: usize,

    /// Eigensolver convergence threshold.
    pub epsilon: f64,

    /// Eigensolver iteration cap; `None` caps at N.
    pub eigen_max_iterations: Option<usize>,

    /// Where `data.txt` and `clusters.txt` go. `None` skips persistence.
    pub output_dir: Option<PathBuf>,

    /// Write the run report as JSON to this path.
    pub report_json: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n: 100,
            k: 5,
            dimension: None,
            random: false,
            seed: 0,
            max_iter: DEFAULT_MAX_ITER,
            epsilon: DEFAULT_EPSILON,
            eigen_max_iterations: None,
            output_dir: None,
            report_json: None,
        }
    }
}

/// Concrete sizes for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    pub n: usize,
    pub k: usize,
    pub dimension: usize,
}

impl RunConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(PipelineError::invalid("epsilon", "must be a positive number"));
        }
        if self.max_iter == 0 {
            return Err(PipelineError::invalid("max_iter", "must be >= 1"));
        }
        if self.eigen_max_iterations == Some(0) {
            return Err(PipelineError::invalid("eigen_max_iterations", "must be >= 1"));
        }
        if self.dimension == Some(0) {
            return Err(PipelineError::invalid("dimension", "must be >= 1"));
        }
        if !self.random {
            if self.k < 1 {
                return Err(PipelineError::invalid("k", "has to be >= 1"));
            }
            if self.n <= self.k {
                return Err(PipelineError::invalid(
                    "n",
                    format!("has to be > k (n = {}, k = {})", self.n, self.k),
                ));
            }
        }
        Ok(())
    }

    /// Resolve dimension, N and k. Fixed mode keeps the user's N and k.
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> RunPlan {
        let dimension = self
            .dimension
            .unwrap_or_else(|| rng.random_range(2..=3));

        let plan = if self.random {
            let (max_n, max_k) = if dimension == 2 {
                (MAX_N_2D, MAX_K_2D)
            } else {
                (MAX_N_3D, MAX_K_3D)
            };
            RunPlan {
                n: rng.random_range(max_n / 2..=max_n),
                k: rng.random_range(max_k / 2..=max_k),
                dimension,
            }
        } else {
            RunPlan {
                n: self.n,
                k: self.k,
                dimension,
            }
        };

        info!(
            "Run plan: N={}, k={}, d={} ({} mode)",
            plan.n,
            plan.k,
            plan.dimension,
            if self.random { "random" } else { "fixed" }
        );
        plan
    }
}
