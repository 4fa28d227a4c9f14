use grouper_core::GroupKey;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenameArgs;
use crate::commands::shared::report::warnings;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper rename`.
pub fn handle(args: &RenameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = GroupKey::new(args.key.as_str());
    let mut service = ctx.open_service(ctx.engine_options())?;
    let report = service.rename_group(&key, args.title.as_str())?;
    ctx.save(service.scheme())?;

    output(
        &json!({
            "key": key,
            "title": args.title,
            "warnings": warnings(&report),
        }),
        flags.format,
    )
}
