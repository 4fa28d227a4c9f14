use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::report::warnings;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper reset`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut service = ctx.open_service(ctx.engine_options())?;
    let report = service.unassign_all()?;
    ctx.save(service.scheme())?;

    output(
        &json!({
            "unassigned": service.scheme().people.len(),
            "warnings": warnings(&report),
        }),
        flags.format,
    )
}
