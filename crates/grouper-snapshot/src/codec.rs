//! Scheme <-> snapshot document conversion.
//!
//! Decoding builds people first, then groups, resolving each `members` entry
//! against the decoded people by id. An id with no matching person decodes
//! to an empty slot rather than an error.

use std::collections::HashSet;

use grouper_core::entities::{DEFAULT_RANK_THRESHOLD, Layout, MAX_GROUP_SIZE};
use grouper_core::{Group, GroupKey, Person, PersonId, Scheme};
use schemars::schema_for;
use semver::Version;

use crate::document::{FORMAT_VERSION, GroupRecord, PersonRecord, SnapshotDocument};
use crate::error::SnapshotError;

/// Converts a scheme to its snapshot document.
#[must_use]
pub fn encode(scheme: &Scheme) -> SnapshotDocument {
    SnapshotDocument {
        version: FORMAT_VERSION.to_string(),
        title: scheme.title.clone(),
        people: scheme.people.iter().map(encode_person).collect(),
        groups: scheme.groups.iter().map(encode_group).collect(),
        use_group_preferences: scheme.use_group_preferences,
        rank_threshold: (scheme.rank_threshold != DEFAULT_RANK_THRESHOLD)
            .then_some(scheme.rank_threshold),
    }
}

fn encode_person(person: &Person) -> PersonRecord {
    PersonRecord {
        id: person.id.to_string(),
        first_name: person.first_name.clone(),
        last_name: person.last_name.clone(),
        connections: person.connections.iter().map(ToString::to_string).collect(),
        group_preferences: person
            .group_preferences
            .iter()
            .map(ToString::to_string)
            .collect(),
        happiness: person.happiness,
        x: person.layout.x,
        y: person.layout.y,
    }
}

fn encode_group(group: &Group) -> GroupRecord {
    GroupRecord {
        title: group.title.clone(),
        max_size: group.max_size,
        x: group.layout.x,
        y: group.layout.y,
        members: group
            .slots
            .iter()
            .map(|slot| slot.as_ref().map(ToString::to_string))
            .collect(),
        key: (group.key.as_str() != group.title).then(|| group.key.to_string()),
    }
}

/// Rebuilds a scheme from a snapshot document.
///
/// # Errors
///
/// - `SnapshotError::Malformed` when `version` is not a semantic version or a
///   group's `maxSize` exceeds [`MAX_GROUP_SIZE`].
/// - `SnapshotError::UnsupportedVersion` when its major version differs from
///   [`FORMAT_VERSION`].
pub fn decode(document: &SnapshotDocument) -> Result<Scheme, SnapshotError> {
    check_version(&document.version)?;
    check_group_sizes(&document.groups)?;

    let mut scheme = Scheme::new(document.title.clone());
    scheme.use_group_preferences = document.use_group_preferences;
    scheme.rank_threshold = document.rank_threshold.unwrap_or(DEFAULT_RANK_THRESHOLD);
    scheme.people = document.people.iter().map(decode_person).collect();

    let known: HashSet<&str> = document.people.iter().map(|p| p.id.as_str()).collect();
    scheme.groups = document
        .groups
        .iter()
        .map(|record| decode_group(record, &known))
        .collect();
    Ok(scheme)
}

fn decode_person(record: &PersonRecord) -> Person {
    let mut person = Person::new(
        record.id.as_str(),
        record.first_name.as_str(),
        record.last_name.as_str(),
    )
    .with_connections(record.connections.iter().map(String::as_str))
    .with_preferences(record.group_preferences.iter().map(String::as_str));
    person.happiness = record.happiness;
    person.layout = Layout {
        x: record.x,
        y: record.y,
    };
    person
}

fn decode_group(record: &GroupRecord, known: &HashSet<&str>) -> Group {
    let key = record
        .key
        .as_deref()
        .filter(|key| !key.is_empty())
        .unwrap_or(&record.title);
    let mut group = Group::with_key(GroupKey::new(key), record.title.as_str(), record.max_size);

    let mut slots: Vec<Option<PersonId>> = record
        .members
        .iter()
        .map(|member| {
            member.as_deref().and_then(|id| {
                if known.contains(id) {
                    Some(PersonId::new(id))
                } else {
                    tracing::warn!(
                        "group {} references unknown person {id}; slot left empty",
                        record.title
                    );
                    None
                }
            })
        })
        .collect();
    if slots.len() < group.capacity() {
        slots.resize(group.capacity(), None);
    }
    group.slots = slots;
    group.layout = Layout {
        x: record.x,
        y: record.y,
    };
    group
}

fn check_group_sizes(groups: &[GroupRecord]) -> Result<(), SnapshotError> {
    let errors: Vec<String> = groups
        .iter()
        .filter(|group| group.max_size > MAX_GROUP_SIZE)
        .map(|group| {
            format!(
                "maxSize {} of group `{}` exceeds the limit of {MAX_GROUP_SIZE}",
                group.max_size, group.title
            )
        })
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SnapshotError::Malformed { errors })
    }
}

fn check_version(version: &str) -> Result<(), SnapshotError> {
    let found = Version::parse(version).map_err(|error| {
        SnapshotError::malformed(format!("version `{version}` is not a semantic version: {error}"))
    })?;
    let supported = Version::parse(FORMAT_VERSION)
        .map_err(|error| SnapshotError::malformed(error.to_string()))?;
    if found.major != supported.major {
        return Err(SnapshotError::UnsupportedVersion {
            found: version.to_string(),
            supported: FORMAT_VERSION.to_string(),
        });
    }
    Ok(())
}

/// Serializes a scheme as pretty-printed snapshot JSON.
///
/// # Errors
///
/// Returns `SnapshotError::Malformed` if serialization fails, which only
/// happens for non-finite coordinates.
pub fn to_json(scheme: &Scheme) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(&encode(scheme))?)
}

/// Parses, schema-validates and decodes snapshot JSON.
///
/// # Errors
///
/// - `SnapshotError::Malformed` on JSON syntax errors, schema violations
///   (wrong types, missing required fields, negative sizes) or a bad version.
/// - `SnapshotError::UnsupportedVersion` on a foreign major version.
pub fn from_json(input: &str) -> Result<Scheme, SnapshotError> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    validate_structure(&value)?;
    let document: SnapshotDocument = serde_json::from_value(value)?;
    decode(&document)
}

fn validate_structure(value: &serde_json::Value) -> Result<(), SnapshotError> {
    let schema = serde_json::to_value(schema_for!(SnapshotDocument))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|error| SnapshotError::malformed(format!("snapshot schema: {error}")))?;
    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|error| format!("{} at {}", error, error.instance_path))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SnapshotError::Malformed { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LEGACY: &str = r#"{
        "version": "2.5.1",
        "title": "Retreat",
        "people": [
            {"id": "a", "firstName": "Ada", "lastName": "A", "connections": ["b"],
             "groupPreferences": ["Red"], "happiness": 1, "x": 10, "y": 20},
            {"id": "b", "firstName": "Bo", "lastName": "B", "happiness": 0}
        ],
        "groups": [
            {"title": "Red", "maxSize": 3, "x": 0, "y": 0, "members": ["a", "ghost", null]}
        ]
    }"#;

    #[test]
    fn legacy_document_decodes_leniently() {
        let scheme = from_json(LEGACY).unwrap();
        assert!(!scheme.use_group_preferences);
        assert_eq!(scheme.rank_threshold, DEFAULT_RANK_THRESHOLD);
        assert!(scheme.people[1].connections.is_empty());

        let red = &scheme.groups[0];
        assert_eq!(red.key.as_str(), "Red");
        assert_eq!(red.slots, vec![Some(PersonId::new("a")), None, None]);
        assert_eq!(scheme.people[0].layout, Layout::at(10.0, 20.0));
    }

    #[test]
    fn short_member_arrays_are_padded_to_max_size() {
        let json = r#"{"version":"2.5.1","title":"t","people":[],
            "groups":[{"title":"G","maxSize":2,"members":[]}]}"#;
        let scheme = from_json(json).unwrap();
        assert_eq!(scheme.groups[0].slots, vec![None, None]);
    }

    #[test]
    fn encode_writes_current_version_and_omits_default_extensions() {
        let scheme = from_json(LEGACY).unwrap();
        let value = serde_json::to_value(encode(&scheme)).unwrap();
        assert_eq!(value["version"], "2.5.1");
        assert!(value.get("rankThreshold").is_none());
        assert!(value["groups"][0].get("key").is_none());
        assert_eq!(value["groups"][0]["members"], serde_json::json!(["a", null, null]));
    }

    #[test]
    fn renamed_group_keeps_key_through_snapshot() {
        let mut scheme = from_json(LEGACY).unwrap();
        scheme.groups[0].title = "Crimson".to_string();
        scheme.rank_threshold = 4;

        let decoded = from_json(&to_json(&scheme).unwrap()).unwrap();
        assert_eq!(decoded.groups[0].key.as_str(), "Red");
        assert_eq!(decoded.groups[0].title, "Crimson");
        assert_eq!(decoded.rank_threshold, 4);
    }

    #[test]
    fn wrong_types_are_malformed() {
        let json = r#"{"version":"2.5.1","title":"t","people":[{"id": 7}],"groups":[]}"#;
        assert!(matches!(from_json(json), Err(SnapshotError::Malformed { .. })));

        let json = r#"{"version":"2.5.1","title":"t","people":[],
            "groups":[{"title":"G","maxSize":-1}]}"#;
        assert!(matches!(from_json(json), Err(SnapshotError::Malformed { .. })));

        assert!(matches!(from_json("{not json"), Err(SnapshotError::Malformed { .. })));
    }

    #[test]
    fn oversized_group_is_malformed() {
        let json = r#"{"version":"2.5.1","title":"t","people":[],
            "groups":[{"title":"G","maxSize":4294967295}]}"#;
        let Err(SnapshotError::Malformed { errors }) = from_json(json) else {
            panic!("expected a malformed snapshot");
        };
        assert!(errors[0].contains("exceeds the limit"));

        let json = format!(
            r#"{{"version":"2.5.1","title":"t","people":[],
            "groups":[{{"title":"G","maxSize":{MAX_GROUP_SIZE}}}]}}"#
        );
        assert!(from_json(&json).is_ok());
    }

    #[test]
    fn foreign_major_version_is_rejected() {
        let json = r#"{"version":"3.0.0","title":"t","people":[],"groups":[]}"#;
        assert!(matches!(
            from_json(json),
            Err(SnapshotError::UnsupportedVersion { .. })
        ));

        let json = r#"{"version":"2.4.0","title":"t","people":[],"groups":[]}"#;
        assert!(from_json(json).is_ok());

        let json = r#"{"version":"latest","title":"t","people":[],"groups":[]}"#;
        assert!(matches!(from_json(json), Err(SnapshotError::Malformed { .. })));
    }
}
