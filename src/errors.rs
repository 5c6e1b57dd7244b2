use std::path::PathBuf;

use crate::integrity::IntegrityIssue;

/// Errors raised while generating or persisting a mock dataset.
///
/// Only `Serialization` and `Write` are expected at runtime; the remaining
/// variants signal a broken invariant (a lookup that should always hit, an
/// empty pool that must be sampled) and abort the run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("No {0} available to sample from")]
    EmptyPool(&'static str),

    #[error("Missing reference: {collection} has no entry {id}")]
    MissingReference { collection: &'static str, id: String },

    #[error("Dataset failed integrity check with {} issue(s)", .0.len())]
    IntegrityViolation(Vec<IntegrityIssue>),
}

impl GeneratorError {
    pub fn missing(collection: &'static str, id: impl std::fmt::Display) -> Self {
        GeneratorError::MissingReference {
            collection,
            id: id.to_string(),
        }
    }

    /// True for the failure kinds the CLI reports as I/O problems rather than bugs.
    pub fn is_output_failure(&self) -> bool {
        matches!(
            self,
            GeneratorError::Serialization(_) | GeneratorError::Write { .. }
        )
    }
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
