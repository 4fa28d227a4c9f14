use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `grouper` binary.
#[derive(Debug, Parser)]
#[command(name = "grouper", version, about = "Grouper - assign people to groups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Snapshot file to operate on
    #[arg(short, long, global = true, conflicts_with = "name")]
    pub scheme: Option<PathBuf>,

    /// Named snapshot in the configured snapshot directory
    #[arg(short, long, global = true)]
    pub name: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            scheme: self.scheme.clone(),
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{ImportCommands, SnapshotCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "grouper", "--format", "table", "--verbose", "--scheme", "camp.json", "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert_eq!(cli.scheme, Some(PathBuf::from("camp.json")));
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["grouper", "validate", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn global_flags_carry_log_verbosity() {
        let cli = Cli::try_parse_from(["grouper", "--quiet", "stats"]).expect("cli should parse");
        let flags = cli.global_flags();
        assert!(flags.quiet);
        assert!(!flags.verbose);
    }

    #[test]
    fn scheme_and_name_are_exclusive() {
        let parsed = Cli::try_parse_from(["grouper", "-s", "a.json", "-n", "camp", "show"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["grouper", "--format", "xml", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn nested_set_commands_take_a_file() {
        let cli = Cli::try_parse_from(["grouper", "people", "set", "people.csv"])
            .expect("cli should parse");
        let Commands::People { action: ImportCommands::Set { file } } = cli.command else {
            panic!("expected people set");
        };
        assert_eq!(file, PathBuf::from("people.csv"));

        let cli = Cli::try_parse_from(["grouper", "snapshots", "list"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Snapshots { action: SnapshotCommands::List }
        ));
    }

    #[test]
    fn move_slot_requires_group() {
        assert!(Cli::try_parse_from(["grouper", "move", "p1", "--slot", "2"]).is_err());

        let cli = Cli::try_parse_from(["grouper", "move", "p1", "--group", "Red", "--slot", "2"])
            .expect("cli should parse");
        let Commands::Move(args) = cli.command else {
            panic!("expected move");
        };
        assert_eq!(args.group.as_deref(), Some("Red"));
        assert_eq!(args.slot, Some(2));
    }

    #[test]
    fn assign_accepts_strategy_and_seed() {
        let cli = Cli::try_parse_from(["grouper", "assign", "--strategy", "random", "--seed", "9"])
            .expect("cli should parse");
        let Commands::Assign(args) = cli.command else {
            panic!("expected assign");
        };
        assert_eq!(args.strategy.as_deref(), Some("random"));
        assert_eq!(args.seed, Some(9));
    }
}
