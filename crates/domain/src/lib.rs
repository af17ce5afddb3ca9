//! TableTome domain library.
//!
//! Core domain types for dice roll resolution. The domain layer is
//! deliberately free of I/O and randomness: die values are produced by the
//! engine crate and resolved here as plain data, so every operation in this
//! crate is deterministic and directly testable.

pub mod error;
pub mod value_objects;

pub use error::DomainError;
pub use value_objects::{
    humanize_successes, DiceCounts, DieSize, RollOutcome, RollResult, RollSpec,
};
