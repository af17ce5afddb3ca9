//! Use cases orchestrating domain operations.

mod roll;

pub use roll::RollDice;
