use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::commands::import::ImportKind;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags),
        Commands::People { action } => {
            commands::import::handle(ImportKind::People, &action, ctx, flags)
        }
        Commands::Groups { action } => {
            commands::import::handle(ImportKind::Groups, &action, ctx, flags)
        }
        Commands::Connections { action } => {
            commands::import::handle(ImportKind::Connections, &action, ctx, flags)
        }
        Commands::Preferences { action } => {
            commands::import::handle(ImportKind::Preferences, &action, ctx, flags)
        }
        Commands::Assign(args) => commands::assign::handle(&args, ctx, flags),
        Commands::Move(args) => commands::relocate::handle(&args, ctx, flags),
        Commands::Rename(args) => commands::rename::handle(&args, ctx, flags),
        Commands::Reset => commands::reset::handle(ctx, flags),
        Commands::Validate => commands::validate::handle(ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Show => commands::show::handle(ctx, flags),
        Commands::Highlight(args) => commands::highlight::handle(&args, ctx, flags),
        Commands::Snapshots { action } => commands::snapshots::handle(&action, ctx, flags),
    }
}
