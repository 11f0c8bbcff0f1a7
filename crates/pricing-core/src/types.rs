//! # Domain Types
//!
//! Core domain types used throughout the pricing workspace.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      User       │   │      Tier       │   │  ShippingType   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Gold           │   │  Domestic       │       │
//! │  │  name           │──►│  Silver         │   │  International  │       │
//! │  │  tier (raw)     │   │  Other          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tier
// =============================================================================

/// Customer loyalty tier.
///
/// Parsing is lossy on purpose: any stored string that is not exactly `gold`
/// or `silver` (ignoring case only) is `Other`, which never earns a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Gold,
    Silver,
    #[default]
    Other,
}

impl Tier {
    /// Parses a stored tier string. Never fails.
    ///
    /// ## Example
    /// ```rust
    /// use pricing_core::Tier;
    ///
    /// assert_eq!(Tier::parse("Gold"), Tier::Gold);
    /// assert_eq!(Tier::parse("SILVER"), Tier::Silver);
    /// assert_eq!(Tier::parse(" silver "), Tier::Other);
    /// assert_eq!(Tier::parse("bronze"), Tier::Other);
    /// assert_eq!(Tier::parse(""), Tier::Other);
    /// ```
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("gold") {
            Tier::Gold
        } else if raw.eq_ignore_ascii_case("silver") {
            Tier::Silver
        } else {
            Tier::Other
        }
    }

    /// Lowercase name used in output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Tier::Gold => "gold",
            Tier::Silver => "silver",
            Tier::Other => "other",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Shipping Type
// =============================================================================

/// Where a parcel is shipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShippingType {
    Domestic,
    International,
}

impl ShippingType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ShippingType::Domestic => "domestic",
            ShippingType::International => "international",
        }
    }
}

impl fmt::Display for ShippingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// User
// =============================================================================

/// A customer record as loaded from the user store.
///
/// The tier is kept exactly as stored so reports can echo it back; use
/// [`User::tier`] for the parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub tier: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            tier: tier.into(),
        }
    }

    /// Returns the parsed tier.
    #[inline]
    pub fn tier(&self) -> Tier {
        Tier::parse(&self.tier)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
