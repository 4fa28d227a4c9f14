use grouper_core::PersonId;
use grouper_engine::Target;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MoveArgs;
use crate::commands::shared::report::warnings;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper move`.
pub fn handle(args: &MoveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let person = PersonId::new(args.person.as_str());
    let target = target_from(args);

    let mut service = ctx.open_service(ctx.engine_options())?;
    let committed = service.reassign(&person, target)?;
    ctx.save(service.scheme())?;

    let happiness = service.scheme().person(&person).map(|p| p.happiness);
    output(
        &json!({
            "person": person,
            "group": args.group,
            "slot": committed.value,
            "happiness": happiness,
            "warnings": warnings(&committed.report),
        }),
        flags.format,
    )
}

fn target_from(args: &MoveArgs) -> Option<Target> {
    let target = Target::group(args.group.as_deref()?);
    Some(match args.slot {
        Some(slot) => target.at_slot(slot),
        None => target,
    })
}

#[cfg(test)]
mod tests {
    use grouper_core::GroupKey;

    use super::*;

    fn args(group: Option<&str>, slot: Option<usize>) -> MoveArgs {
        MoveArgs {
            person: "p1".to_string(),
            group: group.map(str::to_string),
            slot,
        }
    }

    #[test]
    fn no_group_means_unassign() {
        assert_eq!(target_from(&args(None, None)), None);
    }

    #[test]
    fn slot_is_carried_into_target() {
        let target = target_from(&args(Some("Red"), Some(1))).unwrap();
        assert_eq!(target.group, GroupKey::new("Red"));
        assert_eq!(target.slot, Some(1));
    }
}
