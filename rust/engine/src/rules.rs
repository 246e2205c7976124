use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// The chip transfer an accepted action resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Pays the full call amount
    Call(u32),
    /// Raises the street bet to `to`, paying `paid`
    Raise { to: u32, paid: u32 },
    /// Pays the whole remaining bank (short call or short raise)
    AllIn(u32),
}

impl ValidatedAction {
    /// Chips moved from bank to bet.
    pub fn paid(&self) -> u32 {
        match *self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => n,
            ValidatedAction::Raise { paid, .. } => paid,
        }
    }
}

/// What a seat is facing when it acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingContext {
    pub bank: u32,
    pub bet: u32,
    pub current_bet: u32,
    pub min_raise: u32,
}

impl BettingContext {
    pub fn to_call(&self) -> u32 {
        self.current_bet.saturating_sub(self.bet)
    }

    pub fn min_raise_to(&self) -> u32 {
        self.current_bet.saturating_add(self.min_raise)
    }
}

/// Resolves an action into a chip transfer without touching any state.
///
/// Shortfalls are not errors: a call or raise the bank cannot cover becomes
/// [`ValidatedAction::AllIn`] for whatever is left. A raise target below
/// `current_bet + min_raise` is promoted to that minimum.
///
/// # Errors
///
/// - [`GameError::InvalidRaiseAmount`] for a raise target of zero
/// - [`GameError::InsufficientChips`] for a raise when the bank cannot even
///   cover the existing call
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::{validate_action, BettingContext, ValidatedAction};
/// use holdem_engine::player::PlayerAction;
///
/// let ctx = BettingContext { bank: 1000, bet: 0, current_bet: 20, min_raise: 20 };
/// assert_eq!(
///     validate_action(&ctx, PlayerAction::RaiseTo(25)),
///     Ok(ValidatedAction::Raise { to: 40, paid: 40 })
/// );
///
/// let short = BettingContext { bank: 15, bet: 0, current_bet: 20, min_raise: 20 };
/// assert_eq!(
///     validate_action(&short, PlayerAction::CallOrCheck),
///     Ok(ValidatedAction::AllIn(15))
/// );
/// ```
pub fn validate_action(ctx: &BettingContext, action: A) -> Result<ValidatedAction, GameError> {
    let to_call = ctx.to_call();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::CallOrCheck => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if ctx.bank <= to_call {
                Ok(ValidatedAction::AllIn(ctx.bank))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::RaiseTo(amount) => {
            if amount == 0 {
                return Err(GameError::InvalidRaiseAmount { amount });
            }
            if ctx.bank < to_call {
                return Err(GameError::InsufficientChips {
                    to_call,
                    bank: ctx.bank,
                });
            }
            let target = ctx.min_raise_to().max(amount);
            let want = target - ctx.bet;
            if want >= ctx.bank {
                Ok(ValidatedAction::AllIn(ctx.bank))
            } else {
                Ok(ValidatedAction::Raise {
                    to: target,
                    paid: want,
                })
            }
        }
    }
}
