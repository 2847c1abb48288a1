//! Errors surfaced by a comparison run.
//!
//! ```text
//! PipelineError
//! ├── InvalidConfig   (rejected before any numeric work)
//! ├── NoResult        (clustering engine produced no assignment)
//! ├── Dataset         (blob generator parameters)
//! ├── Core            (nsc_core::NscError)
//! ├── Io              (artifact files)
//! └── Report          (JSON report)
//! ```

use nsc_core::NscError;
use thiserror::Error;

pub type PipelineResult<T> = Result<T, PipelineError>;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// The clustering engine returned no labels for the named stage. The run
    /// stops before artifacts are written.
    #[error("{stage}: clustering engine '{engine}' returned no result")]
    NoResult { stage: String, engine: String },

    #[error("dataset generation failed: {0}")]
    Dataset(String),

    #[error(transparent)]
    Core(#[from] NscError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

impl PipelineError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
