//! Per-die classification and pool tallies
//!
//! Each die in a pool lands in one of four buckets relative to the
//! difficulty: botch, failure, success, or critical. The bucket ranges are
//! inclusive and deliberately non-exhaustive - see [`DiceCounts::record`].

use serde::{Deserialize, Serialize};

use super::DieSize;

/// Running bucket counts for one pool of dice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceCounts {
    pub botches: u32,
    pub failures: u32,
    pub successes: u32,
    pub criticals: u32,
}

impl DiceCounts {
    /// Tally every die in `values` against the difficulty thresholds.
    pub fn tally(values: &[i32], difficulty: i32, die_size: DieSize) -> Self {
        let mut counts = Self::default();
        for &value in values {
            counts.record(value, difficulty, die_size);
        }
        counts
    }

    /// Classify a single die value into its bucket.
    ///
    /// Ranges, checked in order:
    /// - `1` is a botch
    /// - `2..=difficulty-1` is a failure
    /// - `difficulty..=faces-1` is a success
    /// - the max face is a critical
    ///
    /// The ranges are not a full partition: with `difficulty <= 2` the
    /// failure range is empty, and with `difficulty == faces` the success
    /// range is empty. A value that falls in no range is counted nowhere.
    /// That gap is part of the game rules, not an oversight.
    pub fn record(&mut self, value: i32, difficulty: i32, die_size: DieSize) {
        let faces = die_size.faces();
        if value == 1 {
            self.botches += 1;
        } else if (2..=difficulty - 1).contains(&value) {
            self.failures += 1;
        } else if (difficulty..=faces - 1).contains(&value) {
            self.successes += 1;
        } else if value == faces {
            self.criticals += 1;
        }
    }

    /// Combine the counts of two pools into one total.
    pub fn combine(self, other: Self) -> Self {
        Self {
            botches: self.botches + other.botches,
            failures: self.failures + other.failures,
            successes: self.successes + other.successes,
            criticals: self.criticals + other.criticals,
        }
    }
}
