//! # Validation Module
//!
//! Input guards shared by the calculators.
//!
//! Every numeric input to a calculator is a quantity (money, kilograms,
//! kilometres), so the only rule is "a number, not below zero". Zero and
//! +∞ are allowed; NaN is not.
//!
//! ## Usage
//! ```rust
//! use pricing_core::validation::validate_non_negative;
//!
//! assert!(validate_non_negative("weight_kg", 0.0).is_ok());
//! assert!(validate_non_negative("weight_kg", -0.1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates that a quantity is a number and `>= 0`.
///
/// Returns the value unchanged so callers can validate inline.
///
/// ## Example
/// ```rust
/// use pricing_core::validation::validate_non_negative;
///
/// assert_eq!(validate_non_negative("order_total", 50.0).unwrap(), 50.0);
/// assert!(validate_non_negative("order_total", f64::NAN).is_err());
/// ```
pub fn validate_non_negative(field: &str, value: f64) -> ValidationResult<f64> {
    if value.is_nan() {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("x", 0.0).is_ok());
        assert!(validate_non_negative("x", 1e9).is_ok());
        // -0.0 compares equal to zero
        assert!(validate_non_negative("x", -0.0).is_ok());

        assert_eq!(
            validate_non_negative("weight_kg", -2.0),
            Err(ValidationError::Negative {
                field: "weight_kg".to_string(),
                value: -2.0,
            })
        );
    }

    #[test]
    fn test_infinities() {
        assert_eq!(validate_non_negative("x", f64::INFINITY), Ok(f64::INFINITY));
        assert!(matches!(
            validate_non_negative("x", f64::NEG_INFINITY),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(matches!(
            validate_non_negative("x", f64::NAN),
            Err(ValidationError::NotANumber { .. })
        ));
    }
}
