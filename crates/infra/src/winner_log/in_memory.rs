use std::cell::RefCell;

use super::r#trait::{ensure_single_line, WinnerLog, WinnerLogError};

/// In-memory winner log.
///
/// Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryWinnerLog {
    entries: RefCell<Vec<String>>,
}

impl InMemoryWinnerLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WinnerLog for InMemoryWinnerLog {
    fn append(&self, name: &str) -> Result<(), WinnerLogError> {
        ensure_single_line(name)?;
        self.entries.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<String>, WinnerLogError> {
        Ok(self.entries.borrow().clone())
    }
}
