//! Auto-assignment defaults.

use grouper_core::AssignStrategy;
use grouper_engine::{DEFAULT_BALANCE_SLACK, EngineOptions};
use serde::{Deserialize, Serialize};

const fn default_balance_slack() -> usize {
    DEFAULT_BALANCE_SLACK
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssignmentConfig {
    /// Strategy used by `assign` when none is given on the command line.
    #[serde(default)]
    pub strategy: AssignStrategy,

    /// Fixed RNG seed for reproducible placement. Unset seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How far above the emptiest group a group may fill while group
    /// preferences are ignored. Must be at least 1.
    #[serde(default = "default_balance_slack")]
    pub balance_slack: usize,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            strategy: AssignStrategy::default(),
            seed: None,
            balance_slack: default_balance_slack(),
        }
    }
}

impl AssignmentConfig {
    /// Engine options for this configuration.
    #[must_use]
    pub const fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            seed: self.seed,
            balance_slack: self.balance_slack,
        }
    }
}
