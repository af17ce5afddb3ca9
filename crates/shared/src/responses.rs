//! Response types for dice roll operations

use serde::{Deserialize, Serialize};

use tabletome_domain::{RollOutcome, RollResult};

/// Wire format for a resolved roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResponse {
    /// Net successes, omitted when no difficulty was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_result: Option<i32>,
    pub total_result_type: RollOutcome,
    pub total_result_humanized: String,
    pub total_dice_roll: Vec<i32>,
    pub player_roll: Vec<i32>,
    pub desperation_roll: Vec<i32>,
}

impl From<RollResult> for DiceRollResponse {
    fn from(result: RollResult) -> Self {
        Self {
            total_result: result.total_result,
            total_result_type: result.total_result_type,
            total_result_humanized: result.total_result_humanized,
            total_dice_roll: result.total_dice_roll,
            player_roll: result.player_roll,
            desperation_roll: result.desperation_roll,
        }
    }
}
