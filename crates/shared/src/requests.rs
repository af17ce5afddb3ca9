//! Request types for dice roll operations

use serde::{Deserialize, Serialize};

use tabletome_domain::{DieSize, DomainError, RollSpec};

/// System-wide cap on the number of dice in a single pool.
///
/// Enforced here, at the caller boundary; the engine assumes validated
/// input.
pub const MAX_POOL_SIZE: u8 = 100;

/// Wire format for a roll request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollRequest {
    /// Number of dice in the player pool
    pub num_dice: u8,
    /// Number of dice in the desperation pool
    pub num_desperation_dice: u8,
    /// Success threshold; absent means no pass/fail evaluation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i32>,
    /// Raw die face count (4, 6, 8, 10, 20, or 100)
    pub die_size: i32,
}

impl DiceRollRequest {
    /// Validate the raw request into a domain spec.
    pub fn validate(&self) -> Result<RollSpec, DomainError> {
        if self.num_dice > MAX_POOL_SIZE {
            return Err(DomainError::validation(format!(
                "Pool size {} exceeds the maximum of {}",
                self.num_dice, MAX_POOL_SIZE
            )));
        }
        if self.num_desperation_dice > MAX_POOL_SIZE {
            return Err(DomainError::validation(format!(
                "Desperation pool size {} exceeds the maximum of {}",
                self.num_desperation_dice, MAX_POOL_SIZE
            )));
        }
        let die_size = DieSize::try_from(self.die_size)?;
        RollSpec::new(
            self.num_dice,
            self.num_desperation_dice,
            self.difficulty,
            die_size,
        )
    }
}
