//! # pricing-core: Pure Pricing Rules
//!
//! This crate holds the order pricing rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Pricing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 pricing-report (binary)                         │   │
//! │  │      load config ──► load users ──► quote ──► print            │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────┐               │                        │
//! │  │  pricing-store              │               │                        │
//! │  │  users.csv ──► Vec<User>    │               │                        │
//! │  └──────────────┬──────────────┘               │                        │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────────────────▼───────────────────┐   │
//! │  │              ★ pricing-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ discount  │  │ shipping  │  │   quote   │  │   │
//! │  │   │ Tier,User │  │ tier/total│  │ type/kg/km│  │ per user  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Tier, ShippingType, User)
//! - [`discount`] - Tier-based order discounts
//! - [`shipping`] - Shipping cost by type, weight and distance
//! - [`quote`] - Per-user pricing quote
//! - [`validation`] - Input guards
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pricing_core::{compute_discount, compute_shipping_cost, ShippingType};
//!
//! let discount = compute_discount("GOLD", 300.0).unwrap();
//! assert!((discount - 60.0).abs() < 1e-9);
//!
//! let cost = compute_shipping_cost(ShippingType::Domestic, 12.0, 900.0).unwrap();
//! assert!((cost - 13.2).abs() < 1e-9);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod quote;
pub mod shipping;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{compute_discount, DiscountRequest};
pub use error::{CoreError, CoreResult, ValidationError};
pub use quote::{Quote, QuoteParams};
pub use shipping::{compute_shipping_cost, ShippingRequest};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sample order total priced for every user in a report.
pub const DEFAULT_ORDER_TOTAL: f64 = 199.99;

/// Sample parcel weight in kilograms.
pub const DEFAULT_WEIGHT_KG: f64 = 12.0;

/// Sample delivery distance in kilometres.
pub const DEFAULT_DISTANCE_KM: f64 = 900.0;

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
