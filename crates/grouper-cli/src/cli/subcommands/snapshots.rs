use clap::Subcommand;

/// Named snapshot commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SnapshotCommands {
    /// List snapshot names in the configured directory.
    List,
}
