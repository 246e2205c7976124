//! Input parsing for interactive play and card arguments.

use holdem_engine::cards::Card;
use holdem_engine::player::PlayerAction;
use std::collections::HashSet;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// User entered q or quit
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or the quit command.
///
/// Accepted (case-insensitive):
/// - `f`, `fold`
/// - `c`, `call`, `check`
/// - `r <to>`, `raise <to>` where `<to>` is the street total to raise to
/// - `q`, `quit`
///
/// The raise amount is passed through as typed; the engine decides whether
/// it is legal.
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(PlayerAction::Fold));
/// assert_eq!(
///     parse_player_action("raise 120"),
///     ParseResult::Action(PlayerAction::RaiseTo(120))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "call" | "c" => ParseResult::Action(PlayerAction::CallOrCheck),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires a target (e.g., 'raise 60')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(to) => ParseResult::Action(PlayerAction::RaiseTo(to)),
                Err(_) => ParseResult::Invalid(format!("Invalid raise amount '{}'", amount)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <to>, q",
            verb
        )),
    }
}

/// Parses card arguments such as `As Kd 10h`, rejecting duplicates.
pub fn parse_cards<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(args.len());
    for raw in args {
        let card: Card = raw.as_ref().parse().map_err(|e| format!("{}", e))?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card: {}", card));
        }
        cards.push(card);
    }
    Ok(cards)
}
