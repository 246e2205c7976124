//! Showdown settlement.
//!
//! The pot is treated as one undivided amount: no side pots are built for
//! unequal all-in stacks, so a short-stacked winner can collect more than a
//! strict side-pot model would give it.

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::game::{GameState, Stage};
use crate::hand::{evaluate_hand, Category, HandScore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    pub seat: usize,
    pub amount: u32,
}

/// How a settled hand ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandOutcome {
    /// Everyone else folded; the pot went to the last seat without evaluation.
    FoldWin(Award),
    /// Best hand(s) at showdown, in seat order.
    Showdown {
        awards: Vec<Award>,
        category: Category,
    },
}

impl HandOutcome {
    pub fn awards(&self) -> Vec<Award> {
        match self {
            HandOutcome::FoldWin(a) => vec![*a],
            HandOutcome::Showdown { awards, .. } => awards.clone(),
        }
    }

    pub fn involves(&self, seat: usize) -> bool {
        self.awards().iter().any(|a| a.seat == seat)
    }
}

/// Splits `pot` evenly among `winners` (given in seat order). The
/// indivisible remainder goes entirely to the first winner.
///
/// ```
/// use holdem_engine::showdown::{split_pot, Award};
///
/// assert_eq!(
///     split_pot(101, &[1, 3]),
///     vec![Award { seat: 1, amount: 51 }, Award { seat: 3, amount: 50 }]
/// );
/// ```
pub fn split_pot(pot: u32, winners: &[usize]) -> Vec<Award> {
    if winners.is_empty() {
        return Vec::new();
    }
    let n = winners.len() as u32;
    let share = pot / n;
    let remainder = pot - share * n;
    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| Award {
            seat,
            amount: share + if i == 0 { remainder } else { 0 },
        })
        .collect()
}

/// Scores every seat still in the hand, pays the best score(s) and settles
/// the hand.
pub(crate) fn settle_showdown(state: &mut GameState) -> Result<HandOutcome, GameError> {
    state.stage = Stage::Showdown;

    let mut best: Option<HandScore> = None;
    for p in state.players.iter_mut().filter(|p| !p.folded) {
        let mut cards = p.hole.clone();
        cards.extend_from_slice(&state.community);
        let score = evaluate_hand(&cards)?;
        p.score = Some(score);
        if best.map_or(true, |b| score > b) {
            best = Some(score);
        }
    }
    let best = best.ok_or(GameError::NotEnoughPlayers)?;

    let winners: Vec<usize> = state
        .players
        .iter()
        .filter(|p| !p.folded && p.score == Some(best))
        .map(|p| p.seat)
        .collect();
    let awards = split_pot(state.pot, &winners);
    for a in &awards {
        state.players[a.seat].bank += a.amount;
    }
    state.pot = 0;

    let outcome = HandOutcome::Showdown {
        awards,
        category: best.category,
    };
    state.outcome = Some(outcome.clone());
    state.settled = true;
    Ok(outcome)
}
