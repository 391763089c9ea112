//! Resumable tic-tac-toe - console game.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use resumable_tictactoe::SaveSlot;
use resumable_tictactoe_cli::{Cli, GameConfig, Renderer, Session};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "Parsed command line");

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.save_path.clone(), cli.no_color);

    let slot = SaveSlot::new(config.save_path().clone());
    let renderer = Renderer::new(*config.color());

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(stdin, stdout, slot, renderer);

    let outcome = session.run(cli.resume_choice())?;
    info!(?outcome, "Exiting");
    Ok(())
}
