use grouper_core::stats::SchemeStats;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.open_service(ctx.engine_options())?;
    output(&SchemeStats::from_scheme(service.scheme()), flags.format)
}
