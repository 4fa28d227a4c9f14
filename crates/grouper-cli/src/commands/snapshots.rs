use crate::cli::GlobalFlags;
use crate::cli::subcommands::SnapshotCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `grouper snapshots`.
pub fn handle(action: &SnapshotCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        SnapshotCommands::List => output(&ctx.store.list()?, flags.format),
    }
}
