use grouper_engine::EngineError;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::commands::shared::report::{errors, warnings};
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper validate`. Reports without modifying the snapshot, and
/// fails when the scheme has errors.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scheme = ctx.load()?;
    let report = grouper_engine::validate(&scheme);

    output(
        &json!({
            "clean": report.is_clean(),
            "errors": errors(&report),
            "warnings": warnings(&report),
        }),
        flags.format,
    )?;

    if report.has_errors() {
        return Err(EngineError::Integrity(report).into());
    }
    Ok(())
}
