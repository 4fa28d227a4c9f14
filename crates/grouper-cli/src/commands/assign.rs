use grouper_core::AssignStrategy;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssignArgs;
use crate::commands::shared::report::warnings;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper assign`.
pub fn handle(args: &AssignArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strategy = match args.strategy.as_deref() {
        Some(raw) => raw.parse::<AssignStrategy>()?,
        None => ctx.config.assignment.strategy,
    };
    let mut options = ctx.engine_options();
    if args.seed.is_some() {
        options.seed = args.seed;
    }

    let mut service = ctx.open_service(options)?;
    let committed = service.autoassign(strategy)?;
    ctx.save(service.scheme())?;

    let outcome = committed.value;
    output(
        &json!({
            "strategy": outcome.strategy,
            "placed": outcome.placed.len(),
            "unplaced": outcome.unplaced,
            "warnings": warnings(&committed.report),
        }),
        flags.format,
    )
}
