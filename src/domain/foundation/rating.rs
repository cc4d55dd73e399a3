//! Rating value object (1 to 5 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How well one alternative performs on one criterion: 1 (worst) to 5 (best).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct RatingValue(u8);

impl RatingValue {
    /// Lowest rating on the scale.
    pub const MIN: u8 = 1;

    /// Highest rating on the scale.
    pub const MAX: u8 = 5;

    /// Creates a RatingValue, returning error if outside 1..=5.
    pub fn try_from_i16(value: i16) -> Result<Self, ValidationError> {
        if value < i16::from(Self::MIN) || value > i16::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "rating",
                i32::from(Self::MIN),
                i32::from(Self::MAX),
                i32::from(value),
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a float for weighted arithmetic.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl TryFrom<i16> for RatingValue {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::try_from_i16(value)
    }
}

impl From<RatingValue> for i16 {
    fn from(value: RatingValue) -> Self {
        i16::from(value.0)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
