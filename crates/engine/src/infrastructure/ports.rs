//! Testability ports for injecting randomness.

/// Source of uniform random integers.
///
/// Use cases take this as a trait object so tests can substitute a
/// deterministic source for the thread-local RNG.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform random integer in `[min, max]` inclusive.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}
