//! Auto-assignment strategies.
//!
//! Each strategy places the currently unassigned people, in scheme order,
//! into groups with free capacity. People for whom no group qualifies stay
//! unassigned.
//!
//! The balanced strategy is a greedy heuristic, not an optimal matching:
//! 1. order people by connection count, most connected first
//! 2. shuffle each run of people tied on connection count
//! 3. for each person, score every eligible group in a fresh random order
//!    and take the first group with the strictly highest score
//!
//! A group is eligible when it has a free slot and, only while group
//! preferences are off, holds fewer than `min occupied + balance_slack`
//! people.

use grouper_core::{AssignStrategy, Group, GroupKey, Person, PersonId, Scheme};
use rand::Rng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Soft cap on how far any group may run ahead of the emptiest group.
pub const DEFAULT_BALANCE_SLACK: usize = 5;

/// Where one person was placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Placement {
    pub person: PersonId,
    pub group: GroupKey,
    pub slot: usize,
}

/// Result of one auto-assignment pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssignmentOutcome {
    pub strategy: AssignStrategy,
    pub placed: Vec<Placement>,
    /// People still unassigned after the pass.
    pub unplaced: Vec<PersonId>,
}

/// Rank-weighted preference score of `group` for `person`.
///
/// `N - index` for a group at `index` among `N` preferences, so a first
/// choice scores `N` and a last choice scores `1`. Unranked groups score `0`.
#[must_use]
pub fn preference_score(person: &Person, group: &Group) -> usize {
    person
        .group_preferences
        .iter()
        .position(|key| *key == group.key)
        .map_or(0, |index| person.group_preferences.len() - index)
}

/// Number of `group` occupants that `person` lists as connections.
#[must_use]
pub fn connection_score(person: &Person, group: &Group) -> usize {
    group
        .members()
        .filter(|member| person.is_connected_to(member))
        .count()
}

/// Whether the balanced strategy may place someone in `group` right now.
#[must_use]
pub fn can_add_to_group(scheme: &Scheme, group: &Group, balance_slack: usize) -> bool {
    if !group.has_available_slot() {
        return false;
    }
    if scheme.use_group_preferences {
        return true;
    }
    let min = scheme.min_occupied().unwrap_or(0);
    group.occupied_count() < min + balance_slack
}

/// Places every unassigned person according to `strategy`.
pub fn autoassign<R: Rng + ?Sized>(
    scheme: &mut Scheme,
    strategy: AssignStrategy,
    rng: &mut R,
    balance_slack: usize,
) -> AssignmentOutcome {
    let unassigned: Vec<Person> = scheme.unassigned().into_iter().cloned().collect();
    tracing::debug!(
        "autoassign strategy={strategy} unassigned={} groups={}",
        unassigned.len(),
        scheme.groups.len()
    );

    let mut outcome = AssignmentOutcome {
        strategy,
        ..AssignmentOutcome::default()
    };
    let order = match strategy {
        AssignStrategy::Balanced => balanced_order(unassigned, rng),
        AssignStrategy::Random | AssignStrategy::Sequential => unassigned,
    };

    for person in order {
        let chosen = match strategy {
            AssignStrategy::Random => pick_random(scheme, rng),
            AssignStrategy::Sequential => pick_sequential(scheme),
            AssignStrategy::Balanced => pick_balanced(scheme, &person, rng, balance_slack),
        };
        let placement = chosen.and_then(|index| {
            let group = &mut scheme.groups[index];
            group.place(person.id.clone()).map(|slot| Placement {
                person: person.id.clone(),
                group: group.key.clone(),
                slot,
            })
        });

        match placement {
            Some(placement) => {
                tracing::debug!(
                    "placed person={} group={} slot={}",
                    placement.person,
                    placement.group,
                    placement.slot
                );
                outcome.placed.push(placement);
            }
            None => {
                tracing::debug!("no eligible group for person={}", person.id);
                outcome.unplaced.push(person.id);
            }
        }
    }

    outcome
}

/// Most connected first, with ties in random order.
fn balanced_order<R: Rng + ?Sized>(mut people: Vec<Person>, rng: &mut R) -> Vec<Person> {
    people.sort_by(|a, b| b.connections.len().cmp(&a.connections.len()));
    shuffle_ties(&mut people, rng);
    people
}

/// Shuffles each contiguous run of people sharing a connection count.
fn shuffle_ties<R: Rng + ?Sized>(people: &mut [Person], rng: &mut R) {
    let mut start = 0;
    while start < people.len() {
        let count = people[start].connections.len();
        let end = people[start..]
            .iter()
            .position(|p| p.connections.len() != count)
            .map_or(people.len(), |offset| start + offset);
        people[start..end].shuffle(rng);
        start = end;
    }
}

fn pick_random<R: Rng + ?Sized>(scheme: &Scheme, rng: &mut R) -> Option<usize> {
    let available: Vec<usize> = scheme
        .groups
        .iter()
        .enumerate()
        .filter(|(_, group)| group.has_available_slot())
        .map(|(index, _)| index)
        .collect();
    available.choose(rng).copied()
}

fn pick_sequential(scheme: &Scheme) -> Option<usize> {
    scheme.groups.iter().position(Group::has_available_slot)
}

fn pick_balanced<R: Rng + ?Sized>(
    scheme: &Scheme,
    person: &Person,
    rng: &mut R,
    balance_slack: usize,
) -> Option<usize> {
    let mut candidates: Vec<usize> = (0..scheme.groups.len()).collect();
    candidates.shuffle(rng);

    let mut best: Option<(usize, usize)> = None;
    for index in candidates {
        let group = &scheme.groups[index];
        if !can_add_to_group(scheme, group, balance_slack) {
            continue;
        }
        let score = if scheme.use_group_preferences {
            preference_score(person, group)
        } else {
            connection_score(person, group)
        };
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}
