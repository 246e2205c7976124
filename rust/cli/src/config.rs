//! Layered CLI configuration.
//!
//! Values resolve in order: built-in defaults, then the TOML file named by
//! `HOLDEM_CONFIG`, then `HOLDEM_*` environment variables. Command-line
//! flags are applied last by the commands themselves.

use holdem_engine::config::{MAX_BOTS, TableConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_BANK_FILE: &str = "holdem-bank.txt";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub bots: usize,
    pub starting_bank: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub bank_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub bots: ValueSource,
    pub starting_bank: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub bank_file: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            bots: ValueSource::Default,
            starting_bank: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            bank_file: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            seed: None,
            bots: table.bot_count,
            starting_bank: table.starting_bank,
            small_blind: table.small_blind,
            big_blind: table.big_blind,
            bank_file: PathBuf::from(DEFAULT_BANK_FILE),
        }
    }
}

impl Config {
    /// Engine table settings for this configuration.
    pub fn table(&self) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            bot_count: self.bots,
            starting_bank: self.starting_bank,
            ..TableConfig::default()
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bots {
            cfg.bots = v;
            sources.bots = ValueSource::File;
        }
        if let Some(v) = f.starting_bank {
            cfg.starting_bank = v;
            sources.starting_bank = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.bank_file {
            cfg.bank_file = v;
            sources.bank_file = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOLDEM_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(bots) = std::env::var("HOLDEM_BOTS")
        && !bots.is_empty()
    {
        cfg.bots = bots
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bot count".into()))?;
        sources.bots = ValueSource::Env;
    }
    if let Ok(bank) = std::env::var("HOLDEM_STARTING_BANK")
        && !bank.is_empty()
    {
        cfg.starting_bank = bank
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid starting bank".into()))?;
        sources.starting_bank = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("HOLDEM_BANK_FILE")
        && !path.is_empty()
    {
        cfg.bank_file = PathBuf::from(path);
        sources.bank_file = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    bots: Option<usize>,
    #[serde(default)]
    starting_bank: Option<u32>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    bank_file: Option<PathBuf>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(1..=MAX_BOTS).contains(&cfg.bots) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bots must be between 1 and {}",
            MAX_BOTS
        )));
    }
    cfg.table()
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))
}
