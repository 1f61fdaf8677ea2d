//! Field validation shared by every constructor and mutator in the model.
//!
//! Each helper returns the accepted value so call sites can validate and bind in
//! one step.

use crate::error::{DomainError, DomainResult};

/// Reject empty and whitespace-only strings.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> DomainResult<&'a str> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_argument(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(value)
}

pub fn require_non_negative(field: &str, value: i64) -> DomainResult<i64> {
    if value < 0 {
        return Err(DomainError::invalid_argument(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(value)
}

/// Quantities moved in or out of stock must be strictly positive.
pub fn require_positive(field: &str, value: i64) -> DomainResult<i64> {
    if value <= 0 {
        return Err(DomainError::invalid_argument(format!(
            "{field} must be positive (got {value})"
        )));
    }
    Ok(value)
}

/// Prices must be finite and non-negative.
pub fn require_price(field: &str, value: f64) -> DomainResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::invalid_argument(format!(
            "{field} must be a non-negative number (got {value})"
        )));
    }
    Ok(value)
}

/// Percentages are inclusive on both ends: `0.0..=100.0`.
pub fn require_percent(field: &str, value: f64) -> DomainResult<f64> {
    if !(0.0..=100.0).contains(&value) {
        return Err(DomainError::invalid_argument(format!(
            "{field} must be between 0 and 100 (got {value})"
        )));
    }
    Ok(value)
}
