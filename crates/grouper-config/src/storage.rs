//! Snapshot storage location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory used when `snapshot_dir` is empty, relative to the working directory.
pub const DEFAULT_SNAPSHOT_DIR: &str = ".grouper/snapshots";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding named snapshots. Empty means [`DEFAULT_SNAPSHOT_DIR`].
    #[serde(default)]
    pub snapshot_dir: String,
}

impl StorageConfig {
    #[must_use]
    pub fn snapshot_dir(&self) -> PathBuf {
        let dir = self.snapshot_dir.trim();
        if dir.is_empty() {
            PathBuf::from(DEFAULT_SNAPSHOT_DIR)
        } else {
            PathBuf::from(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_falls_back_to_default() {
        assert_eq!(
            StorageConfig::default().snapshot_dir(),
            PathBuf::from(DEFAULT_SNAPSHOT_DIR)
        );
        let config = StorageConfig {
            snapshot_dir: "/srv/grouper".to_string(),
        };
        assert_eq!(config.snapshot_dir(), PathBuf::from("/srv/grouper"));
    }
}
