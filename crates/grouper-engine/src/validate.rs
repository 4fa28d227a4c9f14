//! Data-quality validator.
//!
//! A full scan of the scheme producing two severities:
//! - [`Violation`]: structural errors. Any violation aborts the mutation that
//!   triggered the scan.
//! - [`Anomaly`]: recoverable problems. Dangling and self connections are
//!   pruned; stale cached happiness is only reported.
//!
//! Checks, in order:
//! 1. person id uniqueness
//! 2. group title and key uniqueness
//! 3. required person/group fields, positive `max_size`
//! 4. connection pruning (warning), with a happiness recompute for the pruned person
//! 5. group capacity and dangling slot references
//! 6. cached happiness consistency (warning)
//! 7. slot collisions: one person in two slots of a group, or in two groups

use std::collections::{HashMap, HashSet};
use std::fmt;

use grouper_core::happiness::{happiness_of, recompute_person};
use grouper_core::{GroupKey, PersonId, Scheme};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A structural error. Blocks the triggering mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    DuplicatePersonId { id: PersonId },
    DuplicateGroupTitle { title: String },
    DuplicateGroupKey { key: GroupKey },
    MissingPersonField { id: PersonId, field: String },
    MissingGroupField { key: GroupKey, field: String },
    InvalidMaxSize { key: GroupKey, max_size: u32 },
    CapacityExceeded { key: GroupKey, occupied: usize, max_size: u32 },
    DanglingMember { key: GroupKey, id: PersonId },
    SlotCollision { key: GroupKey, id: PersonId, slots: Vec<usize> },
    MultipleGroups { id: PersonId, groups: Vec<GroupKey> },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePersonId { id } => write!(f, "Duplicate person ID: {id}"),
            Self::DuplicateGroupTitle { title } => write!(f, "Duplicate group title: {title}"),
            Self::DuplicateGroupKey { key } => write!(f, "Duplicate group key: {key}"),
            Self::MissingPersonField { id, field } => {
                write!(f, "Missing required field `{field}` for person: {id}")
            }
            Self::MissingGroupField { key, field } => {
                write!(f, "Missing required field `{field}` for group: {key}")
            }
            Self::InvalidMaxSize { key, max_size } => {
                write!(f, "Invalid maxSize for group: {key}, {max_size}")
            }
            Self::CapacityExceeded {
                key,
                occupied,
                max_size,
            } => write!(
                f,
                "Group {key} exceeds maxSize ({occupied} occupied, maxSize {max_size})"
            ),
            Self::DanglingMember { key, id } => {
                write!(f, "Invalid member in group {key}: {id}")
            }
            Self::SlotCollision { key, id, slots } => write!(
                f,
                "Person {id} occupies multiple slots in group {key}: {slots:?}"
            ),
            Self::MultipleGroups { id, groups } => {
                let groups: Vec<&str> = groups.iter().map(GroupKey::as_str).collect();
                write!(f, "Person {id} is a member of several groups: {}", groups.join(", "))
            }
        }
    }
}

/// A recoverable problem, logged and where possible corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    DanglingConnection { person: PersonId, connection: PersonId },
    SelfConnection { person: PersonId },
    StaleHappiness { person: PersonId, found: i32, expected: i32 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingConnection { person, connection } => write!(
                f,
                "Removed invalid connection ID {connection} for person {person}"
            ),
            Self::SelfConnection { person } => {
                write!(f, "Removed self-connection for person {person}")
            }
            Self::StaleHappiness {
                person,
                found,
                expected,
            } => write!(
                f,
                "Happiness conflict for person {person}: found {found}, expected {expected}"
            ),
        }
    }
}

/// Outcome of a validator pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Anomaly>,
}

impl ValidationReport {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// All error messages joined with `; `.
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn log(&self) {
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
        for error in &self.errors {
            tracing::error!("{error}");
        }
    }
}

/// Validates `scheme` without modifying it.
///
/// Pruning corrections are applied to an internal copy so that later checks
/// see the healed state, exactly as `enforce` would.
#[must_use]
pub fn validate(scheme: &Scheme) -> ValidationReport {
    let mut healed = scheme.clone();
    run_checks(&mut healed)
}

/// Validates and heals `scheme`, rejecting it on any error.
///
/// Warnings are logged and the pruned scheme replaces `scheme`. On error the
/// errors are logged and `scheme` is left exactly as it was.
///
/// # Errors
///
/// Returns `EngineError::Integrity` carrying the full report when any
/// violation is found.
pub fn enforce(scheme: &mut Scheme) -> Result<ValidationReport, EngineError> {
    let mut healed = scheme.clone();
    let report = run_checks(&mut healed);
    report.log();

    if report.has_errors() {
        return Err(EngineError::Integrity(report));
    }
    *scheme = healed;
    Ok(report)
}

fn run_checks(scheme: &mut Scheme) -> ValidationReport {
    let mut report = ValidationReport::default();

    let person_ids = check_person_ids(scheme, &mut report);
    check_group_identity(scheme, &mut report);
    check_required_fields(scheme, &mut report);
    prune_connections(scheme, &person_ids, &mut report);
    check_group_members(scheme, &person_ids, &mut report);
    check_happiness(scheme, &mut report);
    check_slot_collisions(scheme, &mut report);

    report
}

fn check_person_ids(scheme: &Scheme, report: &mut ValidationReport) -> HashSet<PersonId> {
    let mut seen = HashSet::new();
    for person in &scheme.people {
        if !seen.insert(person.id.clone()) {
            report.errors.push(Violation::DuplicatePersonId {
                id: person.id.clone(),
            });
        }
    }
    seen
}

fn check_group_identity(scheme: &Scheme, report: &mut ValidationReport) {
    let mut titles = HashSet::new();
    let mut keys = HashSet::new();
    for group in &scheme.groups {
        if !titles.insert(group.title.as_str()) {
            report.errors.push(Violation::DuplicateGroupTitle {
                title: group.title.clone(),
            });
        }
        if !keys.insert(&group.key) {
            report.errors.push(Violation::DuplicateGroupKey {
                key: group.key.clone(),
            });
        }
    }
}

fn check_required_fields(scheme: &Scheme, report: &mut ValidationReport) {
    for person in &scheme.people {
        let missing = [
            ("id", person.id.is_blank()),
            ("firstName", person.first_name.trim().is_empty()),
            ("lastName", person.last_name.trim().is_empty()),
        ];
        for (field, is_missing) in missing {
            if is_missing {
                report.errors.push(Violation::MissingPersonField {
                    id: person.id.clone(),
                    field: field.to_string(),
                });
            }
        }
    }

    for group in &scheme.groups {
        if group.title.trim().is_empty() {
            report.errors.push(Violation::MissingGroupField {
                key: group.key.clone(),
                field: "title".to_string(),
            });
        }
        if group.key.is_blank() {
            report.errors.push(Violation::MissingGroupField {
                key: group.key.clone(),
                field: "key".to_string(),
            });
        }
        if group.max_size == 0 {
            report.errors.push(Violation::InvalidMaxSize {
                key: group.key.clone(),
                max_size: group.max_size,
            });
        }
    }
}

fn prune_connections(
    scheme: &mut Scheme,
    person_ids: &HashSet<PersonId>,
    report: &mut ValidationReport,
) {
    let mut pruned_people = Vec::new();
    for person in &mut scheme.people {
        let before = person.connections.len();
        let owner = person.id.clone();
        person.connections.retain(|connection| {
            if !person_ids.contains(connection) {
                report.warnings.push(Anomaly::DanglingConnection {
                    person: owner.clone(),
                    connection: connection.clone(),
                });
                false
            } else if *connection == owner {
                report
                    .warnings
                    .push(Anomaly::SelfConnection { person: owner.clone() });
                false
            } else {
                true
            }
        });
        if person.connections.len() != before {
            pruned_people.push(owner);
        }
    }

    for id in &pruned_people {
        recompute_person(scheme, id);
    }
}

fn check_group_members(
    scheme: &Scheme,
    person_ids: &HashSet<PersonId>,
    report: &mut ValidationReport,
) {
    for group in &scheme.groups {
        let occupied = group.occupied_count();
        if occupied > group.capacity() {
            report.errors.push(Violation::CapacityExceeded {
                key: group.key.clone(),
                occupied,
                max_size: group.max_size,
            });
        }
        for member in group.members() {
            if !person_ids.contains(member) {
                report.errors.push(Violation::DanglingMember {
                    key: group.key.clone(),
                    id: member.clone(),
                });
            }
        }
    }
}

fn check_happiness(scheme: &Scheme, report: &mut ValidationReport) {
    for person in &scheme.people {
        let expected = happiness_of(scheme, person);
        if person.happiness != expected {
            report.warnings.push(Anomaly::StaleHappiness {
                person: person.id.clone(),
                found: person.happiness,
                expected,
            });
        }
    }
}

fn check_slot_collisions(scheme: &Scheme, report: &mut ValidationReport) {
    let mut memberships: HashMap<&PersonId, Vec<GroupKey>> = HashMap::new();
    let mut first_seen: Vec<&PersonId> = Vec::new();

    for group in &scheme.groups {
        let mut slots_by_person: HashMap<&PersonId, Vec<usize>> = HashMap::new();
        let mut order = Vec::new();
        for (slot, member) in group.slots.iter().enumerate() {
            let Some(member) = member else {
                continue;
            };
            let slots = slots_by_person.entry(member).or_default();
            if slots.is_empty() {
                order.push(member);
            }
            slots.push(slot);
        }

        for member in order {
            let slots = &slots_by_person[member];
            if slots.len() > 1 {
                report.errors.push(Violation::SlotCollision {
                    key: group.key.clone(),
                    id: member.clone(),
                    slots: slots.clone(),
                });
            }
            let groups = memberships.entry(member).or_default();
            if groups.is_empty() {
                first_seen.push(member);
            }
            groups.push(group.key.clone());
        }
    }

    for id in first_seen {
        let groups = &memberships[id];
        if groups.len() > 1 {
            report.errors.push(Violation::MultipleGroups {
                id: id.clone(),
                groups: groups.clone(),
            });
        }
    }
}
