//! Snapshot error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from encoding, decoding and storing snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Input is not a well-formed snapshot document.
    #[error("Malformed snapshot: {}", .errors.join("; "))]
    Malformed {
        /// Individual parse or schema validation messages.
        errors: Vec<String>,
    },

    /// The document declares a format major version this build cannot read.
    #[error("Unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion { found: String, supported: String },

    /// Snapshot names must be plain file stems.
    #[error("Invalid snapshot name '{0}'")]
    InvalidName(String),

    /// Requested snapshot does not exist in the store.
    #[error("Snapshot not found: {0}")]
    NotFound(String),

    /// Filesystem error while reading or writing a snapshot.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            errors: vec![message.into()],
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(error: serde_json::Error) -> Self {
        Self::malformed(error.to_string())
    }
}
