use grouper_engine::import::{parse_groups, parse_people};
use grouper_engine::{SchemeService, SkippedLine, ValidationReport};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImportCommands;
use crate::commands::shared::input::read_input;
use crate::commands::shared::report::warnings;
use crate::context::AppContext;
use crate::output::output;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportKind {
    People,
    Groups,
    Connections,
    Preferences,
}

/// Handle `grouper {people|groups|connections|preferences} set`.
pub fn handle(
    kind: ImportKind,
    action: &ImportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let ImportCommands::Set { file } = action;
    let input = read_input(file)?;

    let mut service = ctx.open_service(ctx.engine_options())?;
    let (applied, skipped, report) = apply(kind, &mut service, &input)?;
    ctx.save(service.scheme())?;

    output(
        &json!({
            "applied": applied,
            "skipped": skipped,
            "warnings": warnings(&report),
        }),
        flags.format,
    )
}

fn apply(
    kind: ImportKind,
    service: &mut SchemeService,
    input: &str,
) -> anyhow::Result<(usize, Vec<SkippedLine>, ValidationReport)> {
    Ok(match kind {
        ImportKind::People => {
            let people = parse_people(input);
            let count = people.len();
            (count, Vec::new(), service.set_people(people)?)
        }
        ImportKind::Groups => {
            let groups = parse_groups(input)?;
            let count = groups.len();
            (count, Vec::new(), service.set_groups(groups)?)
        }
        ImportKind::Connections => {
            let committed = service.set_connections(input)?;
            (committed.value.applied, committed.value.skipped, committed.report)
        }
        ImportKind::Preferences => {
            let committed = service.set_group_preferences(input)?;
            (committed.value.applied, committed.value.skipped, committed.report)
        }
    })
}

#[cfg(test)]
mod tests {
    use grouper_engine::EngineOptions;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn imports_build_a_scheme_in_order() {
        let mut service = SchemeService::new("Camp", EngineOptions::default());

        let (people, _, _) =
            apply(ImportKind::People, &mut service, "a,Ada,L\nb,Bo,K\n").unwrap();
        let (groups, _, _) = apply(ImportKind::Groups, &mut service, "Red,2\n").unwrap();
        let (links, skipped, _) =
            apply(ImportKind::Connections, &mut service, "a,b\nzed,a\n").unwrap();

        assert_eq!((people, groups, links), (2, 1, 1));
        assert_eq!(skipped.len(), 1);
        assert_eq!(service.scheme().people[0].connections.len(), 1);
    }

    #[test]
    fn malformed_group_line_is_rejected() {
        let mut service = SchemeService::new("Camp", EngineOptions::default());
        assert!(apply(ImportKind::Groups, &mut service, "Red,lots\n").is_err());
        assert!(service.scheme().groups.is_empty());
    }
}
