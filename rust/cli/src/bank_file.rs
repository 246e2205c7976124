//! Bank persistence backed by a plain text file holding one integer.

use holdem_engine::bankroll::BankStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io_utils::ensure_parent_dir;

#[derive(Debug, Clone)]
pub struct FileBankStore {
    path: PathBuf,
}

impl FileBankStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BankStore for FileBankStore {
    /// A missing file or anything that is not a whole number of chips reads
    /// as "nothing stored".
    fn load(&self) -> Option<u32> {
        fs::read_to_string(&self.path).ok()?.trim().parse().ok()
    }

    fn save(&mut self, bank: u32) -> io::Result<()> {
        ensure_parent_dir(&self.path)?;
        fs::write(&self.path, format!("{}\n", bank))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBankStore::new(dir.path().join("bank.txt"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn garbage_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.txt");
        for junk in ["", "lots", "-5", "12.5"] {
            fs::write(&path, junk).unwrap();
            assert_eq!(FileBankStore::new(&path).load(), None, "{:?}", junk);
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileBankStore::new(dir.path().join("nested").join("bank.txt"));
        store.save(1870).unwrap();
        assert_eq!(store.load(), Some(1870));
    }
}
