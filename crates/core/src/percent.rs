//! Percentage value object used by price adjustments.

use crate::error::DomainError;
use crate::validate::require_percent;
use crate::value_object::ValueObject;

/// A percentage in the inclusive range `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        Ok(Self(require_percent("percent", value)?))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiplier for a reduction: `1 - p/100`.
    pub fn reduction_factor(self) -> f64 {
        1.0 - self.0 / 100.0
    }

    /// Multiplier for an increase: `1 + p/100`.
    pub fn increase_factor(self) -> f64 {
        1.0 + self.0 / 100.0
    }
}

impl ValueObject for Percent {}

impl TryFrom<f64> for Percent {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
