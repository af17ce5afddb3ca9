//! TableTome Engine library.
//!
//! Orchestrates dice rolls over the domain resolution rules.
//!
//! ## Structure
//!
//! - `use_cases/` - Roll orchestration over the domain
//! - `infrastructure/` - External dependency implementations (ports + adapters)

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::{RandomPort, SystemRandom};
pub use use_cases::RollDice;
