//! Infrastructure layer: winner persistence and configuration loading.

pub mod config;
pub mod winner_log;

pub use config::{ConfigError, LoadedConfig, Locale, RaffleConfig};
pub use winner_log::{FileWinnerLog, InMemoryWinnerLog, WinnerLog, WinnerLogError};
