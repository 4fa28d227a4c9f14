use grouper_engine::SchemeService;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper init`.
pub fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.force {
        ctx.ensure_absent()?;
    }

    let general = &ctx.config.general;
    let mut service = SchemeService::new(args.title.as_str(), ctx.engine_options());
    service.set_use_group_preferences(general.use_group_preferences)?;
    service.set_rank_threshold(general.rank_threshold)?;

    let path = ctx.save(service.scheme())?;
    output(
        &json!({
            "title": service.scheme().title,
            "path": path.display().to_string(),
        }),
        flags.format,
    )
}
