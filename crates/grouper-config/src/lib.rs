//! # grouper-config
//!
//! Layered configuration loading for Grouper using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GROUPER_*` prefix, `__` as separator)
//! 2. Project-level `.grouper/config.toml`
//! 3. User-level `~/.config/grouper/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `GROUPER_ASSIGNMENT__SEED` -> `assignment.seed`,
//! `GROUPER_STORAGE__SNAPSHOT_DIR` -> `storage.snapshot_dir`, etc.
//!
//! ```no_run
//! use grouper_config::GrouperConfig;
//!
//! let config = GrouperConfig::load_with_dotenv().expect("config");
//! println!("snapshots in {}", config.storage.snapshot_dir().display());
//! ```

mod assignment;
mod error;
mod general;
mod storage;

pub use assignment::AssignmentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{DEFAULT_SNAPSHOT_DIR, StorageConfig};

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GrouperConfig {
    #[serde(default)]
    pub assignment: AssignmentConfig,
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl GrouperConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed and
    /// `ConfigError::InvalidValue` when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after pulling `.env` into the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".grouper/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GROUPER_").split("__"))
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when `assignment.balance_slack` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assignment.balance_slack == 0 {
            return Err(ConfigError::InvalidValue {
                field: "assignment.balance_slack".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("grouper").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from
    /// `CARGO_MANIFEST_DIR` when set, else from the current directory.
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouper_core::AssignStrategy;

    #[test]
    fn default_config_is_valid() {
        let config = GrouperConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.assignment.strategy, AssignStrategy::Balanced);
        assert!(config.general.use_group_preferences);
    }

    #[test]
    fn zero_slack_is_rejected() {
        let mut config = GrouperConfig::default();
        config.assignment.balance_slack = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "assignment.balance_slack"
        ));
    }
}
