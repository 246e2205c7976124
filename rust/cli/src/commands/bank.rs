//! Bank reset command.

use crate::bank_file::FileBankStore;
use crate::config;
use crate::error::CliError;
use holdem_engine::bankroll::BankStore;
use std::io::Write;
use std::path::PathBuf;

/// Writes the configured starting stake to the bank file.
pub fn handle_reset_bank_command(
    bank_file: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let mut store = FileBankStore::new(bank_file.unwrap_or(cfg.bank_file));
    let previous = store.load();
    store.save(cfg.starting_bank)?;
    match previous {
        Some(p) => writeln!(
            out,
            "Bank reset from {} to {} ({})",
            p,
            cfg.starting_bank,
            store.path().display()
        )?,
        None => writeln!(
            out,
            "Bank set to {} ({})",
            cfg.starting_bank,
            store.path().display()
        )?,
    }
    Ok(())
}
