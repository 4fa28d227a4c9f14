//! Snapshot wire format.
//!
//! Field names are camelCase. `version` is written as [`FORMAT_VERSION`] and
//! read back verbatim so external tooling can make compatibility checks.
//!
//! Two optional fields extend the base format and are only written when they
//! carry information: `groups[].key` when a group's key differs from its
//! title, and `rankThreshold` when it differs from the default. Documents
//! without them decode exactly as before.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Format version written by this build.
pub const FORMAT_VERSION: &str = "2.5.1";

/// Top-level persisted document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub version: String,
    pub title: String,
    pub people: Vec<PersonRecord>,
    pub groups: Vec<GroupRecord>,
    /// Absent in older documents; read as `false`.
    #[serde(default)]
    pub use_group_preferences: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_threshold: Option<u32>,
}

/// One person. `x`/`y` are presentation coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub group_preferences: Vec<String>,
    #[serde(default)]
    pub happiness: i32,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

/// One group. `members` is aligned to slot index; `null` is an empty slot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub title: String,
    pub max_size: u32,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub members: Vec<Option<String>>,
    /// Stable key when it differs from `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
