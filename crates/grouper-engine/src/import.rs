//! Line-oriented bulk input.
//!
//! Every format is comma separated with trimmed tokens. Blank lines and lines
//! starting with `#` are ignored.
//!
//! - people: `id,firstName,lastName`
//! - groups: `title,maxSize[,key]`
//! - connections: `id,connectedId,connectedId,...`
//! - preferences: `id,groupTitle,groupTitle,...` (most preferred first)
//!
//! People and group files are parsed into values for a bulk replace.
//! Connection and preference lines are applied to existing people; lines
//! naming an unknown person are skipped and reported, never fatal.

use grouper_core::entities::MAX_GROUP_SIZE;
use grouper_core::{Group, GroupKey, Person, PersonId, Scheme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A line that was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub reason: String,
}

/// Result of applying connection or preference lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ImportReport {
    pub applied: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    fn skip(&mut self, line: usize, reason: String) {
        tracing::warn!("line {line}: {reason}");
        self.skipped.push(SkippedLine { line, reason });
    }
}

/// Significant lines with their 1-based line numbers, split into trimmed tokens.
fn records(input: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    input.lines().enumerate().filter_map(|(index, line)| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some((index + 1, trimmed.split(',').map(str::trim).collect()))
    })
}

/// Parses `id,firstName,lastName` lines.
///
/// Missing name columns become empty strings; the validator rejects them.
#[must_use]
pub fn parse_people(input: &str) -> Vec<Person> {
    records(input)
        .map(|(_, tokens)| {
            let field = |i: usize| tokens.get(i).copied().unwrap_or_default();
            Person::new(field(0), field(1), field(2))
        })
        .collect()
}

/// Parses `title,maxSize[,key]` lines.
///
/// # Errors
///
/// Returns `EngineError::MalformedInput` when `maxSize` is missing, is not
/// a non-negative integer, or exceeds [`MAX_GROUP_SIZE`].
pub fn parse_groups(input: &str) -> Result<Vec<Group>, EngineError> {
    records(input)
        .map(|(line, tokens)| {
            let title = tokens[0];
            let raw_size = tokens.get(1).copied().unwrap_or_default();
            let max_size: u32 = raw_size.parse().map_err(|_| EngineError::MalformedInput {
                line,
                reason: format!("maxSize `{raw_size}` for group `{title}` is not a non-negative integer"),
            })?;
            if max_size > MAX_GROUP_SIZE {
                return Err(EngineError::MalformedInput {
                    line,
                    reason: format!(
                        "maxSize {max_size} for group `{title}` exceeds the limit of {MAX_GROUP_SIZE}"
                    ),
                });
            }
            let group = match tokens.get(2).filter(|key| !key.is_empty()) {
                Some(key) => Group::with_key(*key, title, max_size),
                None => Group::new(title, max_size),
            };
            Ok(group)
        })
        .collect()
}

/// Replaces the connection set of each person named at the start of a line.
pub fn apply_connections(scheme: &mut Scheme, input: &str) -> ImportReport {
    let mut report = ImportReport::default();
    for (line, tokens) in records(input) {
        let owner = PersonId::new(tokens[0]);
        let connections: Vec<PersonId> = tokens[1..]
            .iter()
            .filter(|token| !token.is_empty())
            .map(|token| PersonId::new(*token))
            .collect();

        match scheme.person_mut(&owner) {
            Some(person) => {
                tracing::debug!(
                    "assigning {} connections to {}",
                    connections.len(),
                    person.id
                );
                person.connections = connections;
                report.applied += 1;
            }
            None => report.skip(line, format!("no person found for {owner}")),
        }
    }
    report
}

/// Replaces the ordered group preferences of each person named at the start
/// of a line.
///
/// Titles are resolved to the key of the group currently carrying that
/// title. A title with no matching group is stored as a key verbatim, which
/// matches a group created later under that title.
pub fn apply_preferences(scheme: &mut Scheme, input: &str) -> ImportReport {
    let mut report = ImportReport::default();
    for (line, tokens) in records(input) {
        if scheme.people.is_empty() {
            report.skip(
                line,
                "can't set group preferences because there are no people yet".to_string(),
            );
            continue;
        }

        let keys: Vec<GroupKey> = tokens[1..]
            .iter()
            .filter(|token| !token.is_empty())
            .map(|title| resolve_group_key(scheme, title))
            .collect();
        let id = PersonId::new(tokens[0]);
        match scheme.person_mut(&id) {
            Some(person) => {
                person.group_preferences = keys;
                report.applied += 1;
            }
            None => report.skip(line, format!("person not found for group preference: {id}")),
        }
    }
    report
}

fn resolve_group_key(scheme: &Scheme, title: &str) -> GroupKey {
    scheme
        .groups
        .iter()
        .find(|group| group.title == title)
        .map_or_else(|| GroupKey::new(title), |group| group.key.clone())
}
