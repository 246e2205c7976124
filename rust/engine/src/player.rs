use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::HandScore;

/// Seat index of the human player. Every other seat is a bot.
pub const HUMAN_SEAT: usize = 0;

/// An action a seat can submit on its turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Give up the hand
    Fold,
    /// Match the current bet; a zero-cost call is a check
    CallOrCheck,
    /// Raise the street bet to the given total. Targets below the minimum
    /// legal raise are promoted to it.
    RaiseTo(u32),
}

/// One seat at the table.
///
/// `bank` excludes chips already committed this street (`bet`). A seat is
/// `all_in` exactly when its bank reached 0 while it was still in the hand.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub seat: usize,
    pub name: String,
    pub bank: u32,
    pub hole: Vec<Card>,
    pub bet: u32,
    pub folded: bool,
    pub all_in: bool,
    pub is_bot: bool,
    /// Acted since the street opened or since the last raise.
    pub acted: bool,
    /// Best score, filled in at showdown for contenders.
    pub score: Option<HandScore>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, bank: u32, is_bot: bool) -> Self {
        Self {
            seat,
            name: name.into(),
            bank,
            hole: Vec::with_capacity(2),
            bet: 0,
            folded: false,
            all_in: false,
            is_bot,
            acted: false,
            score: None,
        }
    }

    pub fn human(bank: u32) -> Self {
        Self::new(HUMAN_SEAT, "You", bank, false)
    }

    pub fn bot(seat: usize, bank: u32) -> Self {
        Self::new(seat, format!("Bot {}", seat), bank, true)
    }

    /// Can still take a turn this street.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.bank > 0
    }

    /// Clears all per-hand state, keeping identity and bank.
    pub fn reset_for_hand(&mut self) {
        self.hole.clear();
        self.bet = 0;
        self.folded = false;
        self.all_in = false;
        self.acted = false;
        self.score = None;
    }

    /// Moves up to `amount` from bank to bet, capped at the bank. Returns the
    /// chips actually paid and flags all-in when the bank empties.
    pub fn commit(&mut self, amount: u32) -> u32 {
        let pay = amount.min(self.bank);
        self.bank -= pay;
        self.bet += pay;
        if self.bank == 0 && pay > 0 {
            self.all_in = true;
        }
        pay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_caps_at_bank_and_flags_all_in() {
        let mut p = Player::bot(1, 15);
        assert_eq!(p.commit(20), 15);
        assert_eq!(p.bank, 0);
        assert_eq!(p.bet, 15);
        assert!(p.all_in);
        assert!(!p.can_act());
    }

    #[test]
    fn zero_commit_is_a_no_op() {
        let mut p = Player::human(100);
        assert_eq!(p.commit(0), 0);
        assert_eq!(p.bank, 100);
        assert!(!p.all_in);
    }

    #[test]
    fn reset_keeps_bank() {
        let mut p = Player::bot(2, 100);
        p.commit(40);
        p.folded = true;
        p.reset_for_hand();
        assert_eq!(p.bank, 60);
        assert_eq!(p.bet, 0);
        assert!(!p.folded);
        assert!(p.hole.is_empty());
    }
}
