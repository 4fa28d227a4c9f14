use grouper_core::stats::preference_highlights;
use grouper_core::{CoreError, GroupKey};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HighlightArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper highlight`.
pub fn handle(args: &HighlightArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = GroupKey::new(args.key.as_str());
    let service = ctx.open_service(ctx.engine_options())?;
    if service.scheme().group(&key).is_none() {
        return Err(CoreError::group_not_found(key.as_str()).into());
    }
    output(&preference_highlights(service.scheme(), &key), flags.format)
}
