use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::logger::{ActionRecord, RecordedAction};
use crate::player::Player;
use crate::rules::{BettingContext, ValidatedAction};
use crate::showdown::{Award, HandOutcome};

/// Betting streets plus the terminal showdown stage.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Preflop => "Preflop",
            Stage::Flop => "Flop",
            Stage::Turn => "Turn",
            Stage::River => "River",
            Stage::Showdown => "Showdown",
        }
    }
}

/// State of one hand. Created at hand start, mutated only by the engine's
/// transitions and frozen once `settled`.
///
/// Chips committed this street sit in each player's `bet` and are also
/// counted in `pot` as they are paid, so `sum(bank) + pot` is constant for
/// the whole hand.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub(crate) hand_number: u64,
    pub(crate) stage: Stage,
    pub(crate) community: Vec<Card>,
    pub(crate) pot: u32,
    pub(crate) players: Vec<Player>,
    pub(crate) dealer_seat: usize,
    pub(crate) acting_seat: usize,
    pub(crate) current_bet: u32,
    pub(crate) min_raise: u32,
    pub(crate) big_blind: u32,
    pub(crate) last_aggressor: Option<usize>,
    pub(crate) settled: bool,
    pub(crate) outcome: Option<HandOutcome>,
    pub(crate) actions: Vec<ActionRecord>,
}

impl GameState {
    pub(crate) fn new(
        hand_number: u64,
        players: Vec<Player>,
        dealer_seat: usize,
        big_blind: u32,
    ) -> Self {
        Self {
            hand_number,
            stage: Stage::Preflop,
            community: Vec::with_capacity(5),
            pot: 0,
            players,
            dealer_seat,
            acting_seat: dealer_seat,
            current_bet: 0,
            min_raise: big_blind,
            big_blind,
            last_aggressor: None,
            settled: false,
            outcome: None,
            actions: Vec::new(),
        }
    }

    pub fn hand_number(&self) -> u64 {
        self.hand_number
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn dealer_seat(&self) -> usize {
        self.dealer_seat
    }
    pub fn acting_seat(&self) -> usize {
        self.acting_seat
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn min_raise(&self) -> u32 {
        self.min_raise
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn last_aggressor(&self) -> Option<usize> {
        self.last_aggressor
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.outcome.as_ref()
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.players.get(seat).ok_or(GameError::UnknownSeat(seat))
    }

    /// Chips `seat` must add to stay in; 0 for unknown seats.
    pub fn to_call(&self, seat: usize) -> u32 {
        self.players
            .get(seat)
            .map_or(0, |p| self.current_bet.saturating_sub(p.bet))
    }

    /// Smallest legal raise-to amount for the next raise.
    pub fn min_raise_to(&self) -> u32 {
        self.current_bet.saturating_add(self.min_raise)
    }

    /// Display name of the seat's showdown category, if it reached showdown.
    pub fn category_name(&self, seat: usize) -> Option<&'static str> {
        self.players
            .get(seat)
            .and_then(|p| p.score)
            .map(|s| s.category.name())
    }

    pub fn betting_context(&self, seat: usize) -> Result<BettingContext, GameError> {
        let p = self.player(seat)?;
        Ok(BettingContext {
            bank: p.bank,
            bet: p.bet,
            current_bet: self.current_bet,
            min_raise: self.min_raise,
        })
    }

    /// Largest street bet among seats still in the hand.
    pub fn max_bet(&self) -> u32 {
        self.players
            .iter()
            .filter(|p| !p.folded)
            .map(|p| p.bet)
            .max()
            .unwrap_or(0)
    }

    /// Every chip at the table: banks plus the pot.
    pub fn table_chips(&self) -> u64 {
        self.players.iter().map(|p| u64::from(p.bank)).sum::<u64>() + u64::from(self.pot)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| !p.folded).count()
    }

    /// Next seat after `from` that can still act, skipping folded, all-in and
    /// empty-bank seats. Returns `from` unchanged when no other seat is
    /// eligible (including `from` itself being the only eligible one).
    pub fn next_seat(&self, from: usize) -> usize {
        let n = self.players.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&j| self.players[j].can_act())
            .unwrap_or(from)
    }

    /// A street is over when every seat that can still act has matched the
    /// largest bet and has acted since the last raise. All-in seats are
    /// exempt from matching. With at most one seat able to act, matching
    /// alone closes the street.
    pub fn is_round_settled(&self) -> bool {
        let max = self.max_bet();
        let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
        if actors.is_empty() {
            return true;
        }
        if actors.iter().any(|p| p.bet != max) {
            return false;
        }
        actors.len() == 1 || actors.iter().all(|p| p.acted)
    }

    pub(crate) fn record(&mut self, seat: usize, action: RecordedAction) {
        self.actions.push(ActionRecord {
            seat,
            stage: self.stage,
            action,
        });
    }

    /// Posts a forced bet capped at the poster's bank. Short blinds are legal
    /// and leave the poster all-in.
    pub(crate) fn post_blind(&mut self, seat: usize, amount: u32) -> u32 {
        let paid = self.players[seat].commit(amount);
        self.pot += paid;
        paid
    }

    /// Applies an already validated action. Folding down to a single seat
    /// awards the pot to it and settles the hand.
    pub(crate) fn apply(&mut self, seat: usize, action: ValidatedAction) {
        self.record(seat, action.into());
        match action {
            ValidatedAction::Fold => {
                let p = &mut self.players[seat];
                p.folded = true;
                p.acted = true;
                if self.active_count() == 1 {
                    self.award_fold_win();
                }
            }
            ValidatedAction::Check => self.players[seat].acted = true,
            ValidatedAction::Call(_) | ValidatedAction::Raise { .. } | ValidatedAction::AllIn(_) => {
                let prior = self.current_bet;
                let p = &mut self.players[seat];
                let paid = p.commit(action.paid());
                p.acted = true;
                let bet = p.bet;
                self.pot += paid;
                if bet > prior {
                    self.current_bet = bet;
                    self.min_raise = self.big_blind.max(bet - prior);
                    self.last_aggressor = Some(seat);
                    for (i, other) in self.players.iter_mut().enumerate() {
                        if i != seat {
                            other.acted = false;
                        }
                    }
                }
            }
        }
    }

    /// Sweeps street bets (already counted in the pot) and resets per-street
    /// betting state.
    pub(crate) fn end_street(&mut self) {
        for p in &mut self.players {
            p.bet = 0;
            p.acted = false;
        }
        self.current_bet = 0;
        self.min_raise = self.big_blind;
        self.last_aggressor = None;
    }

    /// Calls off a hand that cannot be finished: every seat gets back what it
    /// paid in and the hand is settled without an outcome.
    pub(crate) fn abandon(&mut self) {
        for record in &self.actions {
            let paid = match record.action {
                RecordedAction::SmallBlind(n)
                | RecordedAction::BigBlind(n)
                | RecordedAction::Call(n)
                | RecordedAction::AllIn(n) => n,
                RecordedAction::Raise { paid, .. } => paid,
                RecordedAction::Fold | RecordedAction::Check => 0,
            };
            self.players[record.seat].bank += paid;
        }
        for p in &mut self.players {
            p.bet = 0;
        }
        self.pot = 0;
        self.outcome = None;
        self.settled = true;
    }

    fn award_fold_win(&mut self) {
        let Some(winner) = self.players.iter().position(|p| !p.folded) else {
            return;
        };
        let amount = self.pot;
        self.players[winner].bank += amount;
        self.pot = 0;
        for p in &mut self.players {
            p.bet = 0;
        }
        self.outcome = Some(HandOutcome::FoldWin(Award {
            seat: winner,
            amount,
        }));
        self.settled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(banks: &[u32]) -> GameState {
        let players = banks
            .iter()
            .enumerate()
            .map(|(i, &b)| {
                if i == 0 {
                    Player::human(b)
                } else {
                    Player::bot(i, b)
                }
            })
            .collect();
        GameState::new(1, players, 0, 20)
    }

    #[test]
    fn next_seat_skips_folded_all_in_and_broke() {
        let mut g = table(&[100, 100, 0, 100]);
        g.players[1].folded = true;
        g.players[3].all_in = true;
        g.players[3].bank = 0;
        assert_eq!(g.next_seat(0), 0);
        g.players[1].folded = false;
        assert_eq!(g.next_seat(0), 1);
        assert_eq!(g.next_seat(1), 0);
    }

    #[test]
    fn next_seat_returns_input_when_nobody_can_act() {
        let mut g = table(&[100, 100]);
        g.players[0].folded = true;
        g.players[1].folded = true;
        assert_eq!(g.next_seat(1), 1);
    }

    #[test]
    fn unmatched_bet_keeps_round_open() {
        let mut g = table(&[100, 100, 100]);
        g.current_bet = 20;
        g.players[0].bet = 20;
        g.players[1].bet = 10;
        g.players[2].bet = 20;
        for p in &mut g.players {
            p.acted = true;
        }
        assert!(!g.is_round_settled());
        g.players[1].bet = 20;
        assert!(g.is_round_settled());
        assert!(g.is_round_settled());
    }

    #[test]
    fn matched_but_unacted_round_stays_open() {
        let g = table(&[100, 100, 100]);
        assert!(!g.is_round_settled());
    }

    #[test]
    fn all_in_seats_are_exempt_from_matching() {
        let mut g = table(&[100, 0, 100]);
        g.players[1].all_in = true;
        g.players[1].bet = 5;
        g.players[0].bet = 40;
        g.players[2].bet = 40;
        g.players[0].acted = true;
        g.players[2].acted = true;
        assert!(g.is_round_settled());
    }

    #[test]
    fn raise_reopens_action_and_tracks_min_raise() {
        let mut g = table(&[1000, 1000, 1000]);
        g.current_bet = 20;
        g.players[0].acted = true;
        g.apply(1, ValidatedAction::Raise { to: 70, paid: 70 });
        assert_eq!(g.current_bet, 70);
        assert_eq!(g.min_raise, 50);
        assert_eq!(g.last_aggressor, Some(1));
        assert!(!g.players[0].acted);
        assert!(g.players[1].acted);
        assert_eq!(g.pot, 70);
    }

    #[test]
    fn small_raise_increase_keeps_big_blind_floor() {
        let mut g = table(&[1000, 25]);
        g.current_bet = 20;
        g.apply(1, ValidatedAction::AllIn(25));
        assert_eq!(g.current_bet, 25);
        assert_eq!(g.min_raise, 20);
        assert!(g.players[1].all_in);
    }

    #[test]
    fn abandoned_hand_refunds_every_contribution() {
        let mut g = table(&[1000, 1000, 1000]);
        let sb = g.post_blind(1, 10);
        g.record(1, RecordedAction::SmallBlind(sb));
        let bb = g.post_blind(2, 20);
        g.record(2, RecordedAction::BigBlind(bb));
        g.current_bet = 20;
        g.apply(0, ValidatedAction::Raise { to: 60, paid: 60 });
        g.apply(1, ValidatedAction::Call(50));
        assert_eq!(g.pot, 140);

        g.abandon();
        assert!(g.settled);
        assert!(g.outcome.is_none());
        assert_eq!(g.pot, 0);
        let banks: Vec<u32> = g.players.iter().map(|p| p.bank).collect();
        assert_eq!(banks, vec![1000, 1000, 1000]);
    }

    #[test]
    fn last_fold_awards_pot() {
        let mut g = table(&[100, 100, 100]);
        g.pot = 30;
        g.apply(1, ValidatedAction::Fold);
        assert!(!g.settled);
        g.apply(2, ValidatedAction::Fold);
        assert!(g.settled);
        assert_eq!(g.players[0].bank, 130);
        assert_eq!(g.pot, 0);
        assert_eq!(
            g.outcome,
            Some(HandOutcome::FoldWin(Award {
                seat: 0,
                amount: 30
            }))
        );
    }
}
