//! Named snapshot store.
//!
//! Each snapshot lives at `{dir}/{name}.json`. Names are plain file stems:
//! no path separators, no leading dot.

use std::path::{Path, PathBuf};

use grouper_core::Scheme;

use crate::codec::{from_json, to_json};
use crate::error::SnapshotError;

const EXTENSION: &str = "json";

/// Directory of named snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Create a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory where snapshots are stored.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a snapshot with `name` is stored at.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::InvalidName` for names that are not plain stems.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, SnapshotError> {
        let valid = !name.trim().is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\'])
            && name.trim() == name;
        if !valid {
            return Err(SnapshotError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{EXTENSION}")))
    }

    /// Write `scheme` under `name`, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` when the directory or file cannot be written.
    pub fn save(&self, name: &str, scheme: &Scheme) -> Result<PathBuf, SnapshotError> {
        let path = self.path_for(name)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::Io {
            path: self.dir.clone(),
            source,
        })?;
        write_file(&path, scheme)?;
        tracing::info!("saved snapshot name={name} path={}", path.display());
        Ok(path)
    }

    /// Read the snapshot stored under `name`.
    ///
    /// # Errors
    ///
    /// - `SnapshotError::NotFound` when no such snapshot exists.
    /// - `SnapshotError::Malformed` / `UnsupportedVersion` for bad content.
    pub fn load(&self, name: &str) -> Result<Scheme, SnapshotError> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(SnapshotError::NotFound(name.to_string()));
        }
        let scheme = read_file(&path)?;
        tracing::info!("loaded snapshot name={name} path={}", path.display());
        Ok(scheme)
    }

    /// Names of all stored snapshots, sorted.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotError::Io` when the directory exists but cannot be read.
    pub fn list(&self) -> Result<Vec<String>, SnapshotError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let entries = std::fs::read_dir(&self.dir).map_err(|source| SnapshotError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(str::to_string))
            .collect();
        names.sort_unstable();
        Ok(names)
    }
}

/// Write `scheme` as snapshot JSON to an arbitrary path.
///
/// # Errors
///
/// Returns `SnapshotError::Io` when the file cannot be written.
pub fn write_file(path: &Path, scheme: &Scheme) -> Result<(), SnapshotError> {
    let json = to_json(scheme)?;
    std::fs::write(path, json).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read snapshot JSON from an arbitrary path.
///
/// # Errors
///
/// Returns `SnapshotError::Io` when the file cannot be read, or a decoding
/// error for bad content.
pub fn read_file(path: &Path) -> Result<Scheme, SnapshotError> {
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json(&json)
}
