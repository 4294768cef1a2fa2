//! `toyraffle-core` — primitives shared by the raffle crates.
//!
//! Pure domain types only: no IO, no randomness.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
