//! Hand evaluation command.
//!
//! Scores 5 to 7 cards given on the command line and prints the category
//! and the comparable score tuple.

use crate::error::CliError;
use crate::formatters::format_board;
use crate::ui;
use crate::validation::parse_cards;
use holdem_engine::hand::evaluate_hand;
use std::io::Write;

pub fn handle_eval_command(
    cards: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let parsed = match parse_cards(cards) {
        Ok(c) => c,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    if !(5..=7).contains(&parsed.len()) {
        let msg = format!("expected 5 to 7 cards, got {}", parsed.len());
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let score = evaluate_hand(&parsed)?;
    writeln!(out, "Cards: {}", format_board(&parsed))?;
    writeln!(out, "Category: {}", score.category.name())?;
    writeln!(out, "Score: {:?}", score.values())?;
    Ok(())
}
