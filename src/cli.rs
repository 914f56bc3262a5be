//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and jump-to-move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse clicks or keyboard)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the move list newest first
        #[arg(long)]
        reversed: bool,

        /// Log file (overrides the config file)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Replay a sequence of moves without a terminal UI
    Replay {
        /// Square indices 0-8, comma separated, X first
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this step after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(long)]
        reversed: bool,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "strictly_timeline",
            "replay",
            "--moves",
            "0,1,3,4,6",
            "--jump",
            "2",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay {
                moves, jump, json, reversed,
            } => {
                assert_eq!(moves, vec![0, 1, 3, 4, 6]);
                assert_eq!(jump, Some(2));
                assert!(json);
                assert!(!reversed);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::try_parse_from(["strictly_timeline", "play"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Play { config: None, reversed: false, log_file: None }
        ));
    }
}
