//! # Discount Module
//!
//! Tier-based order discounts.
//!
//! ## Rules (first match wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tier     Threshold (exclusive)    Rate                                 │
//! │  ───────  ──────────────────────   ─────                                │
//! │  gold     total > 200.00           20%                                  │
//! │  silver   total >  50.00           10%                                  │
//! │  other    -                         0%                                  │
//! │                                                                         │
//! │  A gold customer at exactly 200.00 gets nothing.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::Tier;
use crate::validation::validate_non_negative;

pub const GOLD_MIN_TOTAL: f64 = 200.0;
pub const GOLD_DISCOUNT_RATE: f64 = 0.20;
pub const SILVER_MIN_TOTAL: f64 = 50.0;
pub const SILVER_DISCOUNT_RATE: f64 = 0.10;

/// A request to price the discount on one order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountRequest {
    pub tier: Tier,
    pub order_total: f64,
}

impl DiscountRequest {
    pub fn new(tier: Tier, order_total: f64) -> Self {
        DiscountRequest { tier, order_total }
    }

    /// Returns the discount amount (not the discounted total).
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` if `order_total` is negative or NaN.
    pub fn discount(&self) -> CoreResult<f64> {
        let total = validate_non_negative("order_total", self.order_total)?;

        let discount = match self.tier {
            Tier::Gold if total > GOLD_MIN_TOTAL => total * GOLD_DISCOUNT_RATE,
            Tier::Silver if total > SILVER_MIN_TOTAL => total * SILVER_DISCOUNT_RATE,
            _ => 0.0,
        };

        Ok(discount)
    }
}

/// Computes the discount for a stored tier string and an order total.
///
/// Unknown tiers are not an error; they simply yield `0.0`.
///
/// ## Example
/// ```rust
/// use pricing_core::compute_discount;
///
/// assert_eq!(compute_discount("gold", 200.0).unwrap(), 0.0);
/// assert!((compute_discount("silver", 50.01).unwrap() - 5.001).abs() < 1e-9);
/// assert_eq!(compute_discount("bronze", 1000.0).unwrap(), 0.0);
/// assert!(compute_discount("gold", -1.0).is_err());
/// ```
pub fn compute_discount(tier: &str, order_total: f64) -> CoreResult<f64> {
    DiscountRequest::new(Tier::parse(tier), order_total).discount()
}

// =============================================================================
// Unit Tests
// =============================================================================
