//! Entity structs for all Grouper domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be emitted directly as CLI output. The persisted snapshot wire format is
//! owned by `grouper-snapshot`, not by these types.

mod group;
mod person;
mod scheme;

pub use group::{Group, MAX_GROUP_SIZE};
pub use person::Person;
pub use scheme::{DEFAULT_RANK_THRESHOLD, Scheme};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Presentation coordinates. Opaque to the engine; carried for round-trip only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Layout {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Layout {
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }
}
