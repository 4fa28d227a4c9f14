//! Engine error types.

use grouper_core::CoreError;
use thiserror::Error;

use crate::validate::ValidationReport;

/// Errors from scheme mutations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The validator found errors; the mutation was rolled back.
    #[error("Data quality check failed with {} error(s): {}", .0.errors.len(), .0.error_summary())]
    Integrity(ValidationReport),

    /// Manual placement into a group with no free slot.
    #[error("Group {group} is full")]
    GroupFull { group: String },

    /// A bulk input line could not be parsed.
    #[error("Malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Entity lookup or slot errors from the model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EngineError {
    /// The validation report behind an `Integrity` failure.
    #[must_use]
    pub const fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Integrity(report) => Some(report),
            _ => None,
        }
    }
}
