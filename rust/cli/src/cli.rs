//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "No-limit Texas Hold'em against scripted bots"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sit down at the table and play hands interactively
    Play {
        /// Number of bot opponents (1-8)
        #[arg(long)]
        bots: Option<usize>,
        /// Hands to play before leaving the table
        #[arg(long)]
        hands: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// File holding your bank between sessions
        #[arg(long)]
        bank_file: Option<PathBuf>,
        /// Append a JSONL record of every hand to this file
        #[arg(long)]
        history: Option<PathBuf>,
        /// Bot policy: heuristic or calling-station
        #[arg(long, default_value = "heuristic")]
        ai: String,
    },
    /// Evaluate 5 to 7 cards, e.g. `holdem eval As Ks Qs Js 10s`
    Eval {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Restore your bank to the starting stake
    ResetBank {
        #[arg(long)]
        bank_file: Option<PathBuf>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
