//! Criterion weight value object (1-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a criterion, an integer between 1 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Weight(u8);

impl Weight {
    /// Smallest weight a criterion may carry.
    pub const MIN: u8 = 1;

    /// Largest weight a criterion may carry.
    pub const MAX: u8 = 100;

    /// Creates a Weight, returning error if outside 1..=100.
    pub fn try_new(value: i32) -> Result<Self, ValidationError> {
        if value < i32::from(Self::MIN) || value > i32::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "weight",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns this weight as a share of `total`.
    pub fn as_fraction_of(&self, total: u32) -> f64 {
        f64::from(self.0) / f64::from(total)
    }
}

impl TryFrom<i32> for Weight {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for i32 {
    fn from(weight: Weight) -> Self {
        i32::from(weight.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
