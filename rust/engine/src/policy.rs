use rand::RngCore;

use crate::game::GameState;
use crate::player::PlayerAction;

/// Decision seam for bot seats.
///
/// The engine's turn loop calls [`BotPolicy::decide`] whenever the acting
/// seat belongs to a bot. The returned action goes through the same
/// validation as a human submission.
pub trait BotPolicy {
    fn decide(&self, state: &GameState, seat: usize, rng: &mut dyn RngCore) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Always calls or checks. Handy as a deterministic opponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallingStation;

impl BotPolicy for CallingStation {
    fn decide(&self, _state: &GameState, _seat: usize, _rng: &mut dyn RngCore) -> PlayerAction {
        PlayerAction::CallOrCheck
    }

    fn name(&self) -> &str {
        "CallingStation"
    }
}
