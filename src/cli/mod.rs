//! CLI argument surface
//!
//! The board lives only for the process lifetime, so there are no headless
//! task subcommands; the default invocation launches the TUI.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "taskdeck", version, about = "Terminal kanban board for personal task management")]
pub struct Cli {
    /// Path to an alternate config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_bare_invocation() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parses_config_flag() {
        let cli = Cli::parse_from(["taskdeck", "--config", "/tmp/custom.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/custom.toml")));
    }

    #[test]
    fn test_cli_parses_completion_subcommand() {
        let cli = Cli::parse_from(["taskdeck", "completion", "bash"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completion { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_cli_command_assertions() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
