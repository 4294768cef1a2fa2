//! Raffle catalog domain module.
//!
//! This crate contains the business rules for the toy raffle, implemented as
//! deterministic domain logic. Randomness enters only through [`DrawSource`],
//! so every draw can be reproduced in tests.

pub mod catalog;
pub mod draw;
pub mod item;

pub use catalog::{Catalog, DrawOutcome, NoResult};
pub use draw::{DrawSource, FixedDraw, RngDraw};
pub use item::{Item, ItemSpec};
