use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::Stage;
use crate::rules::ValidatedAction;

/// An action as it appears in the hand history, forced bets included.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RecordedAction {
    SmallBlind(u32),
    BigBlind(u32),
    Fold,
    Check,
    Call(u32),
    Raise { to: u32, paid: u32 },
    AllIn(u32),
}

impl From<ValidatedAction> for RecordedAction {
    fn from(v: ValidatedAction) -> Self {
        match v {
            ValidatedAction::Fold => RecordedAction::Fold,
            ValidatedAction::Check => RecordedAction::Check,
            ValidatedAction::Call(n) => RecordedAction::Call(n),
            ValidatedAction::Raise { to, paid } => RecordedAction::Raise { to, paid },
            ValidatedAction::AllIn(n) => RecordedAction::AllIn(n),
        }
    }
}

/// A single action taken during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub stage: Stage,
    pub action: RecordedAction,
}

/// Complete record of a hand, serialised as one JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Format: YYYYMMDD-NNNNNN
    pub hand_id: String,
    /// Session seed (deck and bot noise)
    pub seed: Option<u64>,
    pub hand_number: u64,
    pub dealer: usize,
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Summary line, e.g. "Bot 2 wins 120 (everyone folded)"
    pub result: Option<String>,
    /// RFC3339 timestamp
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Who won at showdown and with what.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    pub category: String,
    #[serde(default)]
    pub notes: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that numbers hands but writes nowhere.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
