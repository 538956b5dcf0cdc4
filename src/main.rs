//! Noughts and Crosses - terminal front end.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts_and_crosses::GameSettings;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play {
        config: None,
        cell_size: None,
    }) {
        Command::Play { config, cell_size } => {
            let mut settings = load_settings(config.as_deref())?;
            if let Some(cell_size) = cell_size {
                settings = settings.with_cell_size(cell_size)?;
            }
            tui::run_tui(&settings)
        }
        Command::Settings { config } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            let settings = load_settings(config.as_deref())?;
            print!("{}", settings.to_toml()?);
            Ok(())
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<GameSettings> {
    match path {
        Some(path) => GameSettings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => Ok(GameSettings::new()),
    }
}
