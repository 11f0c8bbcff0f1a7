//! # Error Types
//!
//! Domain-specific error types for pricing-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pricing-core errors (this file)                                       │
//! │  ├── CoreError        - Calculator failures                            │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pricing-store errors (separate crate)                                 │
//! │  └── StoreError       - File read failures                             │
//! │                                                                         │
//! │  pricing-report errors (binary)                                        │
//! │  └── ConfigError      - Bad environment configuration                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (main) → stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unrecognized tiers are NOT errors anywhere in this hierarchy; they price
//! as "no discount".

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing calculation errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// An argument to a calculator was rejected.
    ///
    /// ## When This Occurs
    /// - Negative order total, weight or distance (including -∞)
    /// - NaN input
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Numeric value is below zero.
    #[error("{field} must not be negative (got {value})")]
    Negative { field: String, value: f64 },

    /// Numeric value is NaN.
    #[error("{field} must be a number")]
    NotANumber { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Negative {
            field: "weight_kg".to_string(),
            value: -1.5,
        };
        assert_eq!(err.to_string(), "weight_kg must not be negative (got -1.5)");

        let err = ValidationError::NotANumber {
            field: "order_total".to_string(),
        };
        assert_eq!(err.to_string(), "order_total must be a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotANumber {
            field: "distance_km".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(
            core_err.to_string(),
            "Invalid argument: distance_km must be a number"
        );
    }
}
