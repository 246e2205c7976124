//! # holdem-ai: Bot Opponents
//!
//! Decision policies for the bot seats of a `holdem_engine` table. Every
//! policy implements the engine's [`BotPolicy`] seam, so the engine's turn
//! loop can drive any of them without knowing which one it holds.
//!
//! ## Core Components
//!
//! - [`heuristic`] - Noisy strength-threshold bot used by the interactive table
//! - [`create_ai`] - Factory building a policy from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::bankroll::MemoryBankStore;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::{AdvanceOutcome, Engine};
//!
//! let bots = create_ai("heuristic").expect("known policy");
//! let mut engine = Engine::new(
//!     TableConfig::default(),
//!     Some(42),
//!     Box::new(MemoryBankStore::new()),
//! )
//! .unwrap();
//! engine.start_hand().unwrap();
//!
//! while engine.advance_bots(bots.as_ref()).unwrap() == AdvanceOutcome::HumanTurn {
//!     engine.submit_fold(0).unwrap();
//! }
//! assert!(engine.state().is_settled());
//! ```
//!
//! ## Policy Names
//!
//! - `"heuristic"` - [`HeuristicBot`]
//! - `"calling-station"` - always checks or calls

use holdem_engine::policy::{BotPolicy, CallingStation};

pub mod heuristic;

pub use heuristic::HeuristicBot;

/// Names accepted by [`create_ai`].
pub const POLICY_NAMES: [&str; 2] = ["heuristic", "calling-station"];

/// Builds a bot policy by name, `None` for unknown names.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// let ai = create_ai("heuristic").unwrap();
/// assert_eq!(ai.name(), "HeuristicBot");
/// assert!(create_ai("solver").is_none());
/// ```
pub fn create_ai(name: &str) -> Option<Box<dyn BotPolicy>> {
    match name {
        "heuristic" => Some(Box::new(HeuristicBot::new())),
        "calling-station" => Some(Box::new(CallingStation)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        for name in POLICY_NAMES {
            assert!(create_ai(name).is_some(), "{} not buildable", name);
        }
    }

    #[test]
    fn calling_station_keeps_its_name() {
        assert_eq!(create_ai("calling-station").unwrap().name(), "CallingStation");
    }
}
