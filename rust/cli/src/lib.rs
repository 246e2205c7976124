//! # holdem CLI Library
//!
//! Terminal front end for the `holdem_engine` table: interactive play
//! against bots, one-off hand evaluation, bank reset and configuration
//! display.
//!
//! The entry point is [`run`], which parses arguments and dispatches to a
//! subcommand with injected output streams.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "play", "--bots", "2", "--hands", "5"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against scripted bots
//! - `eval`: Score 5 to 7 cards
//! - `reset-bank`: Restore the starting stake
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod bank_file;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayArgs, handle_cfg_command, handle_eval_command, handle_play_command,
    handle_reset_bank_command,
};

pub use error::CliError;

/// Parses `args` and runs the chosen subcommand.
///
/// Returns the process exit code: `0` on success, `2` on any error (the
/// message has been written to `err`).
///
/// ```
/// let mut out: Vec<u8> = Vec::new();
/// let code = holdem_cli::run(
///     ["holdem", "eval", "As", "Ks", "Qs", "Js", "10s"],
///     &mut out,
///     &mut Vec::<u8>::new(),
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Straight Flush"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "eval", "reset-bank", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // help and version go to stdout with success
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return if write!(out, "{}", e).is_ok() { 0 } else { 2 };
            }
            let _ = writeln!(err, "{}", e);
            let _ = writeln!(err, "Usage: holdem <command> [options]\n");
            let _ = writeln!(err, "Commands:");
            for c in COMMANDS {
                let _ = writeln!(err, "  {}", c);
            }
            let _ = writeln!(err, "\nFor full help, run: holdem --help");
            return 2;
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            bots,
            hands,
            seed,
            bank_file,
            history,
            ai,
        } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let args = PlayArgs {
                bots,
                hands,
                seed,
                bank_file,
                history,
                ai,
            };
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
        Commands::ResetBank { bank_file } => handle_reset_bank_command(bank_file, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            2
        }
    }
}
