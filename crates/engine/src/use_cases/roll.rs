//! Dice roll use case.
//!
//! Draws the random die values through the injected port and delegates
//! resolution to the domain. The roll itself is a single-shot stateless
//! computation; nothing is persisted here.

use std::sync::Arc;

use tabletome_domain::{RollResult, RollSpec};

use crate::infrastructure::ports::RandomPort;

/// Roll a dice pool and resolve the outcome.
pub struct RollDice {
    random: Arc<dyn RandomPort>,
}

impl RollDice {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Execute a roll.
    ///
    /// Total over validated specs: every enumerated die size and any pool
    /// counts admitted by the caller produce a result. Pool-size caps are
    /// the caller's responsibility.
    pub fn execute(&self, spec: &RollSpec) -> RollResult {
        let player_values = self.draw(spec.num_dice, spec.die_size.faces());
        let desperation_values = self.draw(spec.num_desperation_dice, spec.die_size.faces());

        let result = spec.resolve(player_values, desperation_values);
        tracing::debug!(
            num_dice = spec.num_dice,
            num_desperation_dice = spec.num_desperation_dice,
            difficulty = ?spec.difficulty,
            die_size = %spec.die_size,
            outcome = ?result.total_result_type,
            "resolved dice roll"
        );
        result
    }

    fn draw(&self, count: u8, faces: i32) -> Vec<i32> {
        (0..count).map(|_| self.random.gen_range(1, faces)).collect()
    }
}
