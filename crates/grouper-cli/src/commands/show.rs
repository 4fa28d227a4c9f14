use grouper_core::Scheme;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct PersonRow {
    id: String,
    name: String,
    group: Option<String>,
    slot: Option<usize>,
    happiness: i32,
}

/// Handle `grouper show`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.open_service(ctx.engine_options())?;
    output(&rows(service.scheme()), flags.format)
}

fn rows(scheme: &Scheme) -> Vec<PersonRow> {
    scheme
        .people
        .iter()
        .map(|person| {
            let placement = scheme.group_of(&person.id);
            PersonRow {
                id: person.id.to_string(),
                name: person.display_name(),
                group: placement.map(|(group, _)| group.title.clone()),
                slot: placement.map(|(_, slot)| slot),
                happiness: person.happiness,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use grouper_core::{Group, Person};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_follow_people_order_with_placement() {
        let mut scheme = Scheme::new("Camp");
        scheme.people = vec![Person::new("a", "Ada", "L"), Person::new("b", "Bo", "K")];
        let mut red = Group::new("Red", 2);
        red.place_at("b".into(), 1).unwrap();
        scheme.groups = vec![red];

        let rows = rows(&scheme);
        assert_eq!(rows[0].group, None);
        assert_eq!(rows[1].group.as_deref(), Some("Red"));
        assert_eq!(rows[1].slot, Some(1));
        assert_eq!(rows[1].name, "Bo K");
    }
}
