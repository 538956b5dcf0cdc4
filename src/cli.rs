//! Command-line interface for noughts_and_crosses.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and Crosses - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Two-player tic-tac-toe played with the mouse", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the canvas pixels per cell
        #[arg(long)]
        cell_size: Option<u32>,
    },

    /// Print the effective settings as TOML
    Settings {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
