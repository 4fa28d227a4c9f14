//! Happiness model.
//!
//! A placed person's happiness is the number of connected peers sharing their
//! group. Being placed among peers none of whom are connections scores `-1`,
//! which the presentation layer uses to flag people needing attention. Being
//! unassigned, or alone in a group, scores `0`.

use crate::entities::{Group, Person, Scheme};
use crate::ids::PersonId;

/// Happiness reported for an assigned person with peers but no connected peer.
pub const ISOLATED: i32 = -1;

/// Computes the happiness of `person` if placed in `group`.
#[must_use]
pub fn compute_happiness(person: &Person, group: Option<&Group>) -> i32 {
    let Some(group) = group else {
        return 0;
    };

    let mut peers = 0usize;
    let mut connected = 0i32;
    for member in group.members().filter(|member| **member != person.id) {
        peers += 1;
        if person.is_connected_to(member) {
            connected += 1;
        }
    }

    if connected == 0 && peers > 0 {
        ISOLATED
    } else {
        connected
    }
}

/// Happiness of `person` in its current group within `scheme`.
#[must_use]
pub fn happiness_of(scheme: &Scheme, person: &Person) -> i32 {
    compute_happiness(person, scheme.group_of(&person.id).map(|(group, _)| group))
}

/// Overwrites the cached happiness of every person in the scheme.
pub fn recompute_all(scheme: &mut Scheme) {
    let scores: Vec<i32> = scheme
        .people
        .iter()
        .map(|person| happiness_of(scheme, person))
        .collect();
    for (person, score) in scheme.people.iter_mut().zip(scores) {
        person.happiness = score;
    }
}

/// Overwrites the cached happiness of one person. Returns the new value.
pub fn recompute_person(scheme: &mut Scheme, id: &PersonId) -> Option<i32> {
    let score = happiness_of(scheme, scheme.person(id)?);
    let person = scheme.person_mut(id)?;
    person.happiness = score;
    Some(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::PersonId;
    use rstest::rstest;

    fn group_with(members: &[&str]) -> Group {
        let mut group = Group::new("G", 4);
        for id in members {
            group.place(PersonId::new(*id));
        }
        group
    }

    #[rstest]
    #[case::alone(&["a"], 0)]
    #[case::peers_none_connected(&["a", "c"], -1)]
    #[case::one_connected(&["a", "b", "c"], 1)]
    #[case::two_connected(&["a", "b", "d"], 2)]
    fn happiness_counts_connected_peers(#[case] members: &[&str], #[case] expected: i32) {
        let person = Person::new("a", "A", "A").with_connections(["b", "d"]);
        assert_eq!(compute_happiness(&person, Some(&group_with(members))), expected);
    }

    #[test]
    fn unassigned_is_neutral() {
        let person = Person::new("a", "A", "A").with_connections(["b"]);
        assert_eq!(compute_happiness(&person, None), 0);
    }

    #[test]
    fn empty_group_is_neutral() {
        let person = Person::new("a", "A", "A").with_connections(["b"]);
        assert_eq!(compute_happiness(&person, Some(&group_with(&[]))), 0);
    }

    #[test]
    fn connections_are_directed() {
        let a = Person::new("a", "A", "A").with_connections(["b"]);
        let b = Person::new("b", "B", "B");
        let group = group_with(&["a", "b"]);
        assert_eq!(compute_happiness(&a, Some(&group)), 1);
        assert_eq!(compute_happiness(&b, Some(&group)), ISOLATED);
    }

    #[test]
    fn recompute_all_resets_unassigned_people() {
        let mut scheme = Scheme::new("t");
        let mut stale = Person::new("z", "Z", "Z");
        stale.happiness = 3;
        scheme.people = vec![
            Person::new("a", "A", "A").with_connections(["b"]),
            Person::new("b", "B", "B"),
            stale,
        ];
        scheme.groups = vec![group_with(&["a", "b"])];

        recompute_all(&mut scheme);

        let scores: Vec<i32> = scheme.people.iter().map(|p| p.happiness).collect();
        assert_eq!(scores, [1, -1, 0]);
    }
}
