use clap::{Args, Subcommand};

use crate::cli::subcommands::{ImportCommands, SnapshotCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create an empty scheme.
    Init(InitArgs),
    /// People (`id,firstName,lastName` lines).
    People {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Groups (`title,maxSize[,key]` lines).
    Groups {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Connections (`id,connectedId,...` lines).
    Connections {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Group preferences (`id,groupTitle,...` lines, most preferred first).
    Preferences {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Place every unassigned person.
    Assign(AssignArgs),
    /// Move one person to a group, or out of all groups.
    Move(MoveArgs),
    /// Change a group's title, keeping its key.
    Rename(RenameArgs),
    /// Empty every group.
    Reset,
    /// Run the data-quality check.
    Validate,
    /// Summary statistics.
    Stats,
    /// Everyone with their group, slot and happiness.
    Show,
    /// People who rank a group within the rank threshold.
    Highlight(HighlightArgs),
    /// Named snapshots.
    Snapshots {
        #[command(subcommand)]
        action: SnapshotCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Scheme title.
    pub title: String,
    /// Overwrite an existing snapshot.
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AssignArgs {
    /// random, sequential or balanced (defaults to the configured strategy).
    #[arg(long)]
    pub strategy: Option<String>,
    /// Seed for reproducible placement (overrides config).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct MoveArgs {
    /// Person id.
    pub person: String,
    /// Destination group key. Omit to unassign.
    #[arg(long)]
    pub group: Option<String>,
    /// Preferred slot in the destination group (0-based).
    #[arg(long, requires = "group")]
    pub slot: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct RenameArgs {
    /// Group key.
    pub key: String,
    /// New title.
    pub title: String,
}

#[derive(Clone, Debug, Args)]
pub struct HighlightArgs {
    /// Group key.
    pub key: String,
}
