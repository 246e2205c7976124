//! Persistence seam for the human player's bank.
//!
//! The engine never touches storage directly: whoever builds the [`Engine`]
//! hands it a [`BankStore`], and the engine saves through it after every pot
//! award involving the human seat and on reset.
//!
//! [`Engine`]: crate::engine::Engine

use std::io;

pub trait BankStore: Send {
    /// Stored balance, or `None` when nothing usable is stored.
    fn load(&self) -> Option<u32>;

    fn save(&mut self, bank: u32) -> io::Result<()>;
}

/// Keeps the balance in memory. Useful for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryBankStore {
    value: Option<u32>,
    saves: usize,
}

impl MemoryBankStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(bank: u32) -> Self {
        Self {
            value: Some(bank),
            saves: 0,
        }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl BankStore for MemoryBankStore {
    fn load(&self) -> Option<u32> {
        self.value
    }

    fn save(&mut self, bank: u32) -> io::Result<()> {
        self.value = Some(bank);
        self.saves += 1;
        Ok(())
    }
}
