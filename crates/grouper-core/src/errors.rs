//! Cross-cutting error types for Grouper.
//!
//! Domain-specific errors (`EngineError`, `SnapshotError`, `ConfigError`) are
//! defined in their respective crates. The CLI converges them with `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Grouper crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// An assignment strategy name was not recognised.
    #[error("Unknown assignment strategy '{0}' (expected random, sequential or balanced)")]
    UnknownStrategy(String),

    /// A slot index outside the group's slot array.
    #[error("Slot {slot} is out of range for group {group} ({len} slots)")]
    SlotOutOfRange {
        group: String,
        slot: usize,
        len: usize,
    },

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    #[must_use]
    pub fn person_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "person".to_string(),
            id: id.into(),
        }
    }

    #[must_use]
    pub fn group_not_found(key: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "group".to_string(),
            id: key.into(),
        }
    }
}
