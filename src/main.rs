//! Taskdeck - Terminal kanban board for personal task management

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{Cli, Commands};
use taskdeck::config::Config;
use taskdeck::tui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "taskdeck", &mut std::io::stdout());
            Ok(())
        }
        None => {
            let config = match cli.config {
                Some(path) => Config::load_from(&path)?,
                None => Config::load_or_default(),
            };
            tui::run(config).await
        }
    }
}
