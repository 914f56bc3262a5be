//! Strictly Timeline - Unified CLI
//!
//! Terminal tic-tac-toe with move history, plus a headless replay mode.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use strictly_timeline::cli::{Cli, Command};
use strictly_timeline::{AppConfig, ReplayReport, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            reversed,
            log_file,
        } => run_play(config, reversed, log_file),
        Command::Replay {
            moves,
            jump,
            reversed,
            json,
        } => run_replay(moves, jump, reversed, json),
    }
}

/// Run the terminal game
fn run_play(config: Option<PathBuf>, reversed: bool, log_file: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config.as_deref())?
        .with_reversed(reversed)
        .with_log_file(log_file);

    // Log to file to avoid interfering with the terminal UI
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Starting Strictly Timeline");
    run_tui(&config)
}

/// Run a headless replay
fn run_replay(moves: Vec<usize>, jump: Option<usize>, reversed: bool, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let session = replay(&moves, jump, reversed);
    let report = ReplayReport::from_session(&session);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}
