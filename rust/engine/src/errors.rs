use thiserror::Error;

/// Errors raised by the engine.
///
/// Two kinds exist. Fatal errors ([`GameError::is_fatal`]) mean an engine
/// invariant was broken and the hand must be abandoned. Every other variant is
/// a rejected request: the state was left untouched and the caller should
/// re-prompt the same actor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
    #[error("Invalid raise amount: {amount}")]
    InvalidRaiseAmount { amount: u32 },
    #[error("Insufficient chips to raise: {to_call} to call with {bank} behind")]
    InsufficientChips { to_call: u32, bank: u32 },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("Hand already complete")]
    HandAlreadyComplete,
    #[error("A hand is still in progress")]
    HandInProgress,
    #[error("Player already folded")]
    PlayerAlreadyFolded,
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Unknown seat {0}")]
    UnknownSeat(usize),
    #[error("Not enough funded seats to deal a hand")]
    NotEnoughPlayers,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// True when the error signals a broken engine invariant rather than a
    /// rejected action.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GameError::EmptyDeck | GameError::InvalidCardCount(_))
    }
}
