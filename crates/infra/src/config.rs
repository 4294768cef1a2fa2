//! Configuration loading and representation.
//!
//! The raffle runs from built-in sample data unless a JSON file is named via
//! `TOYRAFFLE_CONFIG`. Individual settings can be overridden from the
//! environment. Loading never fails as a whole: a setting that cannot be
//! used falls back to its default and the problem is reported alongside.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use toyraffle_catalog::{Catalog, ItemSpec};
use toyraffle_core::DomainError;

pub const CONFIG_ENV: &str = "TOYRAFFLE_CONFIG";
pub const WINNERS_LOG_ENV: &str = "TOYRAFFLE_WINNERS_LOG";
pub const LOCALE_ENV: &str = "TOYRAFFLE_LOCALE";

pub const DEFAULT_WINNERS_PATH: &str = "won_toys.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),

    #[error("unknown locale: {0:?}")]
    UnknownLocale(String),
}

/// Language of the user-facing outcome line.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Ru,
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

/// Everything the driver needs to run one raffle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaffleConfig {
    pub items: Vec<ItemSpec>,
    pub winners_path: PathBuf,
    pub locale: Locale,
}

impl Default for RaffleConfig {
    fn default() -> Self {
        Self {
            items: sample_items(),
            winners_path: PathBuf::from(DEFAULT_WINNERS_PATH),
            locale: Locale::default(),
        }
    }
}

/// A usable configuration plus every problem worked around to get it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: RaffleConfig,
    pub problems: Vec<ConfigError>,
}

impl RaffleConfig {
    /// Load from the process environment.
    pub fn load() -> LoadedConfig {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    ///
    /// Fallback is per setting: an unreadable file yields the defaults, a bad
    /// locale keeps the previous one, and an invalid item list is replaced by
    /// the sample items. Valid settings are kept in every case.
    pub fn load_with<F>(lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut problems = Vec::new();

        let mut config = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(path).unwrap_or_else(|err| {
                problems.push(err);
                Self::default()
            }),
            None => Self::default(),
        };

        if let Some(path) = lookup(WINNERS_LOG_ENV) {
            config.winners_path = PathBuf::from(path);
        }
        if let Some(locale) = lookup(LOCALE_ENV) {
            match locale.parse() {
                Ok(locale) => config.locale = locale,
                Err(err) => problems.push(err),
            }
        }
        if let Err(err) = config.validate() {
            problems.push(err);
            config.items = sample_items();
        }

        LoadedConfig { config, problems }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), items = config.items.len(), "config file loaded");
        Ok(config)
    }

    /// Check the item records the same way the catalog will.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog().map(|_| ())
    }

    pub fn catalog(&self) -> Result<Catalog, ConfigError> {
        Ok(Catalog::from_specs(self.items.iter().cloned())?)
    }
}

fn sample_items() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new(1, "Teddy Bear", 10, 25.0),
        ItemSpec::new(2, "Toy Car", 15, 20.0),
        ItemSpec::new(3, "Doll", 8, 15.0),
    ]
}
