//! Append-only record of raffle winners.
//!
//! One winner name per line, in draw order. The boundary is a trait so the
//! driver can be exercised against memory in tests and a flat file in
//! production.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileWinnerLog;
pub use in_memory::InMemoryWinnerLog;
pub use r#trait::{WinnerLog, WinnerLogError};
