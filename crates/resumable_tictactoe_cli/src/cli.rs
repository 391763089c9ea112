//! Command-line interface for the tictactoe binary.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Two-player tic-tac-toe with save and resume
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe that can save and resume a game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Where to keep the saved game (overrides the config file)
    #[arg(long)]
    pub save_path: Option<PathBuf>,

    /// Print markers without terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Resume the saved game without asking
    #[arg(long, conflicts_with = "new")]
    pub resume: bool,

    /// Start a new game without asking
    #[arg(long)]
    pub new: bool,
}

impl Cli {
    /// Answer to the load prompt given on the command line, if any.
    pub fn resume_choice(&self) -> Option<bool> {
        if self.resume {
            Some(true)
        } else if self.new {
            Some(false)
        } else {
            None
        }
    }
}
