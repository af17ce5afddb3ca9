//! TableTome Shared library.
//!
//! Wire-facing request and response contracts for the roll API. The
//! surrounding HTTP layer deserializes requests here, validates them into
//! domain specs, and serializes responses back out. Pool-size caps live
//! here, not in the engine.

pub mod requests;
pub mod responses;

pub use requests::{DiceRollRequest, MAX_POOL_SIZE};
pub use responses::DiceRollResponse;
