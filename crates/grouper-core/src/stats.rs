//! Scheme statistics and preference highlighting.
//!
//! These are read-only projections the operator surface prints. Nothing here
//! mutates the scheme.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Scheme;
use crate::happiness::ISOLATED;
use crate::ids::{GroupKey, PersonId};

/// Summary counts over a scheme.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SchemeStats {
    pub total_people: usize,
    pub assigned: usize,
    pub unassigned: usize,
    pub unassigned_pct: f64,
    /// People whose cached happiness is `-1`.
    pub unhappy: usize,
    /// People with more than one connection.
    pub people_with_connections: usize,
    /// `unhappy` as a share of `people_with_connections`.
    pub unhappy_pct: f64,
    pub groups: Vec<GroupStats>,
}

/// Per-group occupancy and mean happiness.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct GroupStats {
    pub key: GroupKey,
    pub title: String,
    pub occupied: usize,
    pub max_size: u32,
    pub mean_happiness: f64,
}

/// A person ranking a group within the scheme's rank threshold.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PreferenceHighlight {
    pub person: PersonId,
    pub display_name: String,
    pub rank: usize,
}

impl SchemeStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_scheme(scheme: &Scheme) -> Self {
        let total_people = scheme.people.len();
        let unassigned = scheme.unassigned().len();
        let unhappy = scheme
            .people
            .iter()
            .filter(|p| p.happiness == ISOLATED)
            .count();
        let people_with_connections = scheme
            .people
            .iter()
            .filter(|p| p.connections.len() > 1)
            .count();

        let groups = scheme
            .groups
            .iter()
            .map(|group| {
                let scores: Vec<i32> = group
                    .members()
                    .filter_map(|id| scheme.person(id))
                    .map(|p| p.happiness)
                    .collect();
                let mean_happiness = if scores.is_empty() {
                    0.0
                } else {
                    round2(f64::from(scores.iter().sum::<i32>()) / scores.len() as f64)
                };
                GroupStats {
                    key: group.key.clone(),
                    title: group.title.clone(),
                    occupied: group.occupied_count(),
                    max_size: group.max_size,
                    mean_happiness,
                }
            })
            .collect();

        Self {
            total_people,
            assigned: total_people - unassigned,
            unassigned,
            unassigned_pct: percentage(unassigned, total_people),
            unhappy,
            people_with_connections,
            unhappy_pct: percentage(unhappy, people_with_connections),
            groups,
        }
    }
}

/// People ranking `key` at or above the scheme's `rank_threshold`, best rank first.
#[must_use]
pub fn preference_highlights(scheme: &Scheme, key: &GroupKey) -> Vec<PreferenceHighlight> {
    let threshold = scheme.rank_threshold as usize;
    let mut highlights: Vec<PreferenceHighlight> = scheme
        .people
        .iter()
        .filter_map(|person| {
            let rank = person.preference_rank(key)?;
            (rank <= threshold).then(|| PreferenceHighlight {
                person: person.id.clone(),
                display_name: person.display_name(),
                rank,
            })
        })
        .collect();
    highlights.sort_by_key(|h| h.rank);
    highlights
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round2(part as f64 / whole as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Group, Person};
    use crate::happiness::recompute_all;
    use pretty_assertions::assert_eq;

    fn scheme() -> Scheme {
        let mut scheme = Scheme::new("stats");
        scheme.people = vec![
            Person::new("a", "Ada", "A")
                .with_connections(["b", "c"])
                .with_preferences(["G2", "G1"]),
            Person::new("b", "Bo", "B").with_preferences(["G1"]),
            Person::new("c", "Cy", "C").with_preferences(["G3", "G4", "G1"]),
        ];
        let mut g1 = Group::new("G1", 2);
        g1.place(PersonId::new("a"));
        g1.place(PersonId::new("c"));
        scheme.groups = vec![g1, Group::new("G2", 2)];
        recompute_all(&mut scheme);
        scheme
    }

    #[test]
    fn stats_count_assignment_and_unhappiness() {
        let stats = SchemeStats::from_scheme(&scheme());
        assert_eq!(stats.total_people, 3);
        assert_eq!(stats.assigned, 2);
        assert_eq!(stats.unassigned, 1);
        assert_eq!(stats.unassigned_pct, 33.33);
        // c is placed with a but lists no connections
        assert_eq!(stats.unhappy, 1);
        assert_eq!(stats.people_with_connections, 1);
        assert_eq!(stats.unhappy_pct, 100.0);
        assert_eq!(stats.groups[0].occupied, 2);
        assert_eq!(stats.groups[0].mean_happiness, 0.0);
        assert_eq!(stats.groups[1].mean_happiness, 0.0);
    }

    #[test]
    fn stats_on_empty_scheme_do_not_divide_by_zero() {
        let stats = SchemeStats::from_scheme(&Scheme::new("empty"));
        assert_eq!(stats.unassigned_pct, 0.0);
        assert_eq!(stats.unhappy_pct, 0.0);
    }

    #[test]
    fn highlights_respect_rank_threshold() {
        let scheme = scheme();
        let highlights = preference_highlights(&scheme, &GroupKey::new("G1"));
        let ranked: Vec<(&str, usize)> = highlights
            .iter()
            .map(|h| (h.person.as_str(), h.rank))
            .collect();
        // c ranks G1 third, outside the default threshold of 2
        assert_eq!(ranked, vec![("b", 1), ("a", 2)]);
    }
}
