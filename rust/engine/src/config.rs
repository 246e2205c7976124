use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Table stakes and seating for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Scripted opponents seated after the human (seat 0)
    pub bot_count: usize,
    /// Default stake for the human and for every bot
    pub starting_bank: u32,
    /// Refill broke bots to `starting_bank` before each hand
    pub rebuy_bots: bool,
    /// Cap on consecutive automatic steps in one `advance_bots` pass
    pub max_auto_steps: usize,
}

pub const MAX_BOTS: usize = 8;

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            bot_count: 3,
            starting_bank: 2000,
            rebuy_bots: true,
            max_auto_steps: 200,
        }
    }
}

impl TableConfig {
    pub fn seat_count(&self) -> usize {
        self.bot_count + 1
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.big_blind == 0 || self.small_blind == 0 {
            return Err(GameError::InvalidConfig("blinds must be > 0".into()));
        }
        if self.small_blind >= self.big_blind {
            return Err(GameError::InvalidConfig(
                "small blind must be below the big blind".into(),
            ));
        }
        if !(1..=MAX_BOTS).contains(&self.bot_count) {
            return Err(GameError::InvalidConfig(format!(
                "bot count must be between 1 and {}",
                MAX_BOTS
            )));
        }
        if self.starting_bank == 0 {
            return Err(GameError::InvalidConfig("starting bank must be > 0".into()));
        }
        let table_chips = u64::from(self.starting_bank) * self.seat_count() as u64;
        if table_chips > u64::from(u32::MAX) {
            return Err(GameError::InvalidConfig(format!(
                "starting bank {} across {} seats exceeds the chip limit of {}",
                self.starting_bank,
                self.seat_count(),
                u32::MAX
            )));
        }
        if self.max_auto_steps == 0 {
            return Err(GameError::InvalidConfig("max auto steps must be > 0".into()));
        }
        Ok(())
    }
}
