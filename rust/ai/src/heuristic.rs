//! Noisy strength-threshold bot.
//!
//! Estimates how good its hand is on a 0..1 scale, blurs the estimate with a
//! little uniform noise and then mostly calls. It folds some weak hands when
//! facing a bet and raises only with strong hands, and even then only part of
//! the time. There is no opponent modelling and no pot-odds reasoning.

use holdem_engine::cards::Card;
use holdem_engine::game::{GameState, Stage};
use holdem_engine::hand::evaluate_hand;
use holdem_engine::player::PlayerAction;
use holdem_engine::policy::BotPolicy;
use rand::{Rng, RngCore};
use tracing::debug;

/// Total width of the noise band centred on the estimate (±0.09).
pub const NOISE_WIDTH: f64 = 0.18;
/// Below this strength a bot facing a bet considers folding.
pub const FOLD_BELOW: f64 = 0.25;
/// Chance of actually folding once [`FOLD_BELOW`] applies.
pub const FOLD_CHANCE: f64 = 0.55;
/// Below this strength a bot never raises.
pub const RAISE_FROM: f64 = 0.62;
/// Chance of just calling even with a raising hand.
pub const CALL_CHANCE: f64 = 0.65;

/// Pocket-card quality before the flop.
///
/// Weighted high and low ranks plus flat bonuses for a pair and for suited
/// cards. Pocket aces score above 1.0; callers clamp after adding noise.
pub fn preflop_strength(hole: &[Card]) -> f64 {
    let [a, b] = hole else {
        return 0.0;
    };
    let (r1, r2) = (a.rank.value(), b.rank.value());
    let (hi, lo) = (r1.max(r2) as f64, r1.min(r2) as f64);

    let mut s = hi / 14.0 * 0.55 + lo / 14.0 * 0.25;
    if r1 == r2 {
        s += 0.35;
    }
    if a.suit == b.suit {
        s += 0.08;
    }
    s
}

/// Made-hand quality once there is a board: category scaled to 0..1 plus a
/// small bump from the leading tiebreaker.
pub fn postflop_strength(hole: &[Card], community: &[Card]) -> f64 {
    let mut cards = hole.to_vec();
    cards.extend_from_slice(community);
    match evaluate_hand(&cards) {
        Ok(score) => {
            score.category.index() as f64 / 8.0 + score.tiebreaks[0] as f64 / 14.0 * 0.08
        }
        Err(_) => preflop_strength(hole),
    }
}

/// What the acting bot is facing, in chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spot {
    pub to_call: u32,
    pub can_raise: bool,
    pub max_bet: u32,
    pub min_raise: u32,
    pub big_blind: u32,
}

impl Spot {
    pub fn for_seat(state: &GameState, seat: usize) -> Self {
        let to_call = state.to_call(seat);
        let bank = state.player(seat).map_or(0, |p| p.bank);
        Self {
            to_call,
            can_raise: bank > to_call.saturating_add(state.min_raise()),
            max_bet: state.max_bet(),
            min_raise: state.min_raise(),
            big_blind: state.big_blind(),
        }
    }

    /// Raise-to target for a given strength: one minimum raise over the
    /// largest bet plus up to three big blinds scaled by strength.
    pub fn raise_target(&self, strength: f64) -> u32 {
        let extra = (strength * 3.0 * self.big_blind as f64).floor() as u32;
        self.max_bet
            .saturating_add(self.min_raise)
            .saturating_add(extra)
    }
}

/// Turns a (noisy, clamped) strength into an action.
///
/// `draw` yields uniform samples in `[0, 1)` and is only called when a
/// decision actually hinges on chance.
pub fn decide_action(strength: f64, spot: &Spot, draw: &mut dyn FnMut() -> f64) -> PlayerAction {
    if spot.to_call > 0 && strength < FOLD_BELOW && draw() < FOLD_CHANCE {
        return PlayerAction::Fold;
    }
    if !spot.can_raise || strength < RAISE_FROM || draw() < CALL_CHANCE {
        return PlayerAction::CallOrCheck;
    }
    PlayerAction::RaiseTo(spot.raise_target(strength))
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    fn base_strength(state: &GameState, seat: usize) -> f64 {
        let Ok(player) = state.player(seat) else {
            return 0.0;
        };
        if state.stage() == Stage::Preflop {
            preflop_strength(&player.hole)
        } else {
            postflop_strength(&player.hole, state.community())
        }
    }
}

impl BotPolicy for HeuristicBot {
    fn decide(&self, state: &GameState, seat: usize, rng: &mut dyn RngCore) -> PlayerAction {
        let noise = (rng.random::<f64>() - 0.5) * NOISE_WIDTH;
        let strength = (Self::base_strength(state, seat) + noise).clamp(0.0, 1.0);
        let spot = Spot::for_seat(state, seat);
        let action = decide_action(strength, &spot, &mut || rng.random::<f64>());
        debug!(seat, strength, to_call = spot.to_call, ?action, "bot decision");
        action
    }

    fn name(&self) -> &str {
        "HeuristicBot"
    }
}
