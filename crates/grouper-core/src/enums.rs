//! Assignment strategy enum.
//!
//! Uses `snake_case` serialization so config files and CLI arguments share
//! one spelling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Placement strategy applied by an auto-assignment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignStrategy {
    /// Uniformly random group among those with a free slot.
    Random,
    /// Fill groups to capacity in declaration order.
    Sequential,
    /// Greedy, most-connected-first placement into the best scoring group.
    #[default]
    Balanced,
}

impl AssignStrategy {
    pub const ALL: [Self; 3] = [Self::Random, Self::Sequential, Self::Balanced];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sequential => "sequential",
            Self::Balanced => "balanced",
        }
    }
}

impl fmt::Display for AssignStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssignStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "sequential" => Ok(Self::Sequential),
            "balanced" => Ok(Self::Balanced),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}
