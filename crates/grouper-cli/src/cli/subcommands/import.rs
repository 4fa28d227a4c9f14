use std::path::PathBuf;

use clap::Subcommand;

/// Bulk input commands. Lines are comma separated; blank and `#` lines are ignored.
#[derive(Clone, Debug, Subcommand)]
pub enum ImportCommands {
    /// Replace from a file (`-` reads stdin).
    Set { file: PathBuf },
}
