use std::path::PathBuf;

use thiserror::Error;

/// Winner log operation error.
///
/// These are **infrastructure errors** (filesystem, format) as opposed to
/// domain errors. They are returned to the caller, which decides whether a
/// failed append is worth more than a diagnostic.
#[derive(Debug, Error)]
pub enum WinnerLogError {
    #[error("winner log io failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The name would break the one-name-per-line format.
    #[error("invalid winner name: {0:?}")]
    InvalidName(String),
}

impl WinnerLogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Append-only winner log.
///
/// `append()` records exactly one line per call. `entries()` returns every
/// recorded name in append order; a log that was never written reads as empty.
pub trait WinnerLog {
    fn append(&self, name: &str) -> Result<(), WinnerLogError>;

    fn entries(&self) -> Result<Vec<String>, WinnerLogError>;
}

/// Reject names that would split into several lines (or none).
pub(crate) fn ensure_single_line(name: &str) -> Result<(), WinnerLogError> {
    if name.is_empty() || name.contains(['\n', '\r']) {
        return Err(WinnerLogError::InvalidName(name.to_string()));
    }
    Ok(())
}
