//! Value objects - Immutable objects defined by their attributes

mod dice_pool;
mod die_size;
mod roll;

pub use dice_pool::DiceCounts;
pub use die_size::DieSize;
pub use roll::{humanize_successes, RollOutcome, RollResult, RollSpec};
