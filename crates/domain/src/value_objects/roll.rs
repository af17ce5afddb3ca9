//! Roll resolution value objects
//!
//! `RollSpec` describes a single roll; [`RollSpec::resolve`] turns a set of
//! already-rolled die values into a [`RollResult`]. Drawing the random
//! values is the engine's job, which keeps resolution a pure function.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::{DiceCounts, DieSize};

/// Outcome category for a resolved roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollOutcome {
    Success,
    Failure,
    Botch,
    Critical,
    /// No pass/fail evaluation applies (no difficulty, or a die size
    /// without an outcome ladder)
    Other,
}

impl RollOutcome {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Botch => "Botch",
            Self::Critical => "Critical Success!",
            Self::Other => "Other",
        }
    }
}

/// A validated request for a single dice roll.
///
/// Pool counts are capped by the caller (see the shared crate); difficulty
/// is constructor-validated to be at least 1 when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollSpec {
    pub num_dice: u8,
    pub num_desperation_dice: u8,
    pub difficulty: Option<i32>,
    pub die_size: DieSize,
}

impl RollSpec {
    /// Create a new roll spec
    pub fn new(
        num_dice: u8,
        num_desperation_dice: u8,
        difficulty: Option<i32>,
        die_size: DieSize,
    ) -> Result<Self, DomainError> {
        if let Some(difficulty) = difficulty {
            if difficulty < 1 {
                return Err(DomainError::validation("Difficulty must be at least 1"));
            }
        }
        Ok(Self {
            num_dice,
            num_desperation_dice,
            difficulty,
            die_size,
        })
    }

    /// Total number of dice across both pools
    pub fn pool_total(&self) -> usize {
        self.num_dice as usize + self.num_desperation_dice as usize
    }

    /// Resolve already-rolled die values into a result.
    ///
    /// Classification runs over the values in the order given; the sorting
    /// of the returned pools is display-only and happens afterwards, as an
    /// independent pass.
    pub fn resolve(&self, player_values: Vec<i32>, desperation_values: Vec<i32>) -> RollResult {
        debug_assert_eq!(player_values.len(), self.num_dice as usize);
        debug_assert_eq!(desperation_values.len(), self.num_desperation_dice as usize);

        let (total_result, total_result_type, total_result_humanized) = match self.difficulty {
            None => (None, RollOutcome::Other, String::new()),
            Some(difficulty) => {
                let counts = DiceCounts::tally(&player_values, difficulty, self.die_size)
                    .combine(DiceCounts::tally(&desperation_values, difficulty, self.die_size));
                let result = self.net_result(&counts);
                if self.die_size == DieSize::D10 {
                    (
                        Some(result),
                        self.outcome_for(result),
                        humanize_successes(result),
                    )
                } else {
                    (Some(result), RollOutcome::Other, String::new())
                }
            }
        };

        let mut player_roll = player_values;
        player_roll.sort_unstable();
        let mut desperation_roll = desperation_values;
        desperation_roll.sort_unstable();

        let mut total_dice_roll = Vec::with_capacity(player_roll.len() + desperation_roll.len());
        total_dice_roll.extend_from_slice(&player_roll);
        total_dice_roll.extend_from_slice(&desperation_roll);
        total_dice_roll.sort_unstable();

        RollResult {
            total_result,
            total_result_type,
            total_result_humanized,
            total_dice_roll,
            player_roll,
            desperation_roll,
        }
    }

    /// Net the combined bucket counts into a single signed result.
    ///
    /// On a d10, botches and criticals cancel each other out and each
    /// surviving critical is worth two successes. Every other die size
    /// scores a plain successes-minus-failures-minus-botches total.
    fn net_result(&self, counts: &DiceCounts) -> i32 {
        if self.die_size == DieSize::D10 {
            let eff_botches = counts.botches.saturating_sub(counts.criticals);
            let eff_criticals = counts.criticals.saturating_sub(counts.botches);
            counts.successes as i32 + 2 * eff_criticals as i32 - eff_botches as i32
        } else {
            counts.successes as i32 - counts.failures as i32 - counts.botches as i32
        }
    }

    /// Map a net result to its outcome category (d10 ladder).
    fn outcome_for(&self, result: i32) -> RollOutcome {
        if result < 0 {
            RollOutcome::Botch
        } else if result == 0 {
            RollOutcome::Failure
        } else if result <= self.pool_total() as i32 {
            RollOutcome::Success
        } else {
            RollOutcome::Critical
        }
    }
}

/// Resolved roll, ready for the API layer to serialize
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    /// Net successes, absent when no difficulty was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_result: Option<i32>,
    pub total_result_type: RollOutcome,
    pub total_result_humanized: String,
    /// All die values rolled, sorted ascending
    pub total_dice_roll: Vec<i32>,
    /// Player pool, sorted ascending
    pub player_roll: Vec<i32>,
    /// Desperation pool, sorted ascending
    pub desperation_roll: Vec<i32>,
}

/// Format a net success count for display.
///
/// English count pluralization: 1 is singular, everything else (including
/// 0 and negatives) is plural.
pub fn humanize_successes(count: i32) -> String {
    if count == 1 {
        format!("{} success", count)
    } else {
        format!("{} successes", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(
        num_dice: u8,
        num_desperation_dice: u8,
        difficulty: Option<i32>,
        die_size: DieSize,
    ) -> RollSpec {
        RollSpec::new(num_dice, num_desperation_dice, difficulty, die_size).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_difficulty() {
        assert!(matches!(
            RollSpec::new(3, 0, Some(0), DieSize::D10),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_new_accepts_absent_difficulty() {
        assert!(RollSpec::new(3, 0, None, DieSize::D10).is_ok());
    }

    #[test]
    fn test_no_difficulty_skips_classification() {
        let result = spec(3, 2, None, DieSize::D10).resolve(vec![9, 1, 5], vec![10, 2]);
        assert_eq!(result.total_result, None);
        assert_eq!(result.total_result_type, RollOutcome::Other);
        assert_eq!(result.total_result_humanized, "");
        assert_eq!(result.player_roll, vec![1, 5, 9]);
        assert_eq!(result.desperation_roll, vec![2, 10]);
        assert_eq!(result.total_dice_roll, vec![1, 2, 5, 9, 10]);
    }

    #[test]
    fn test_botches_and_criticals_cancel() {
        // Two botches and two criticals net to zero; the lone 3 is a
        // failure, which the d10 formula ignores
        let result = spec(5, 0, Some(6), DieSize::D10).resolve(vec![1, 1, 10, 10, 3], vec![]);
        assert_eq!(result.total_result, Some(0));
        assert_eq!(result.total_result_type, RollOutcome::Failure);
        assert_eq!(result.total_result_humanized, "0 successes");
    }

    #[test]
    fn test_all_successes() {
        let result = spec(3, 0, Some(6), DieSize::D10).resolve(vec![7, 8, 9], vec![]);
        assert_eq!(result.total_result, Some(3));
        assert_eq!(result.total_result_type, RollOutcome::Success);
        assert_eq!(result.total_result_humanized, "3 successes");
    }

    #[test]
    fn test_critical_doubles_past_pool_size() {
        // A single critical is worth 2, which exceeds the 1-die pool
        let result = spec(1, 0, Some(6), DieSize::D10).resolve(vec![10], vec![]);
        assert_eq!(result.total_result, Some(2));
        assert_eq!(result.total_result_type, RollOutcome::Critical);
        assert_eq!(result.total_result_humanized, "2 successes");
    }

    #[test]
    fn test_net_botch() {
        let result = spec(2, 0, Some(6), DieSize::D10).resolve(vec![1, 3], vec![]);
        assert_eq!(result.total_result, Some(-1));
        assert_eq!(result.total_result_type, RollOutcome::Botch);
        assert_eq!(result.total_result_humanized, "-1 successes");
    }

    #[test]
    fn test_single_success_singular() {
        let result = spec(2, 0, Some(6), DieSize::D10).resolve(vec![7, 3], vec![]);
        assert_eq!(result.total_result, Some(1));
        assert_eq!(result.total_result_humanized, "1 success");
    }

    #[test]
    fn test_non_d10_has_no_outcome_ladder() {
        // d6 with difficulty: buckets tally generically, but the result
        // stays numeric-only with no netting or doubling
        let result = spec(2, 0, Some(6), DieSize::D6).resolve(vec![1, 5], vec![]);
        assert_eq!(result.total_result, Some(-2));
        assert_eq!(result.total_result_type, RollOutcome::Other);
        assert_eq!(result.total_result_humanized, "");
    }

    #[test]
    fn test_non_d10_plain_scoring() {
        // d20 difficulty 15: 20 is a critical but scores nothing extra,
        // 16 and 18 are successes, 3 is a failure
        let result = spec(4, 0, Some(15), DieSize::D20).resolve(vec![20, 16, 18, 3], vec![]);
        assert_eq!(result.total_result, Some(1));
        assert_eq!(result.total_result_type, RollOutcome::Other);
    }

    #[test]
    fn test_desperation_dice_count_toward_totals() {
        // Player 7 (success) + desperation 10 (critical) and 1 (botch):
        // botch and critical cancel, leaving 1 success
        let result = spec(1, 2, Some(6), DieSize::D10).resolve(vec![7], vec![10, 1]);
        assert_eq!(result.total_result, Some(1));
        assert_eq!(result.total_result_type, RollOutcome::Success);
        assert_eq!(result.total_dice_roll, vec![1, 7, 10]);
        assert_eq!(result.player_roll, vec![7]);
        assert_eq!(result.desperation_roll, vec![1, 10]);
    }

    #[test]
    fn test_empty_pools() {
        let result = spec(0, 0, Some(6), DieSize::D10).resolve(vec![], vec![]);
        assert_eq!(result.total_result, Some(0));
        assert_eq!(result.total_result_type, RollOutcome::Failure);
        assert!(result.total_dice_roll.is_empty());
    }

    #[test]
    fn test_sorting_does_not_affect_classification() {
        // Unsorted input, same buckets either way; output pools come back
        // sorted
        let result = spec(4, 0, Some(6), DieSize::D10).resolve(vec![9, 1, 10, 2], vec![]);
        assert_eq!(result.player_roll, vec![1, 2, 9, 10]);
        // The botch cancels the critical, leaving the lone 9 as a success
        assert_eq!(result.total_result, Some(1));
    }

    #[test]
    fn test_humanize_successes() {
        assert_eq!(humanize_successes(1), "1 success");
        assert_eq!(humanize_successes(0), "0 successes");
        assert_eq!(humanize_successes(2), "2 successes");
        assert_eq!(humanize_successes(-1), "-1 successes");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = spec(1, 0, Some(6), DieSize::D10).resolve(vec![7], vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalResult"], 1);
        assert_eq!(json["totalResultType"], "SUCCESS");
        assert_eq!(json["totalResultHumanized"], "1 success");
        assert_eq!(json["totalDiceRoll"], serde_json::json!([7]));
    }

    #[test]
    fn test_absent_result_omitted_from_json() {
        let result = spec(1, 0, None, DieSize::D10).resolve(vec![7], vec![]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("totalResult").is_none());
        assert_eq!(json["totalResultType"], "OTHER");
    }
}
