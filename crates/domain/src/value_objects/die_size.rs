//! Die size value object
//!
//! The campaign rules only allow the standard polyhedral dice; anything
//! else is rejected at the boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Allowed die face counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D20,
    D100,
}

impl DieSize {
    /// Number of faces on the die
    pub fn faces(&self) -> i32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }
}

impl TryFrom<i32> for DieSize {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            _ => Err(DomainError::validation(format!(
                "Unsupported die size: d{}",
                value
            ))),
        }
    }
}

impl From<DieSize> for i32 {
    fn from(die_size: DieSize) -> Self {
        die_size.faces()
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces())
    }
}
