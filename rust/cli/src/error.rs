//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] turns
//! an error into a message on stderr and exit code 2.

use holdem_engine::errors::GameError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error (bank file, history file, stdout/stderr writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input or command-line arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An engine rejection that could not be recovered from at this level
    #[error("Engine error: {0}")]
    Engine(#[from] GameError),

    /// The bot turn loop stopped without settling hand N
    #[error("Hand {0} stopped making progress")]
    Stalled(u64),
}
