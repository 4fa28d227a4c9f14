//! Identifier newtypes.
//!
//! People are identified by an operator-supplied string id. Groups are
//! identified by a `GroupKey` that stays fixed for the life of the group,
//! while the group title is a renamable display attribute. Preference lists
//! reference groups by key.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally unique person identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty after trimming whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Stable group identifier used as the preference-matching key.
///
/// Defaults to the group title at creation time. Renaming a group never
/// changes its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GroupKey(String);

impl GroupKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&PersonId::new("p-01")).unwrap();
        assert_eq!(json, "\"p-01\"");

        let key: GroupKey = serde_json::from_str("\"Red Team\"").unwrap();
        assert_eq!(key.as_str(), "Red Team");
    }

    #[test]
    fn blank_detection_trims() {
        assert!(PersonId::new("  ").is_blank());
        assert!(!PersonId::new("a").is_blank());
        assert!(GroupKey::new("").is_blank());
    }
}
