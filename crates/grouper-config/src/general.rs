//! Scheme-wide defaults applied to newly created schemes.

use grouper_core::entities::DEFAULT_RANK_THRESHOLD;
use serde::{Deserialize, Serialize};

const fn default_use_group_preferences() -> bool {
    true
}

const fn default_rank_threshold() -> u32 {
    DEFAULT_RANK_THRESHOLD
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whether balanced assignment scores group preferences.
    #[serde(default = "default_use_group_preferences")]
    pub use_group_preferences: bool,

    /// Highest preference rank counted by `highlight`.
    #[serde(default = "default_rank_threshold")]
    pub rank_threshold: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            use_group_preferences: default_use_group_preferences(),
            rank_threshold: default_rank_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert!(config.use_group_preferences);
        assert_eq!(config.rank_threshold, 2);
    }
}
