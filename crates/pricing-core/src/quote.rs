//! # Quote Module
//!
//! Prices one sample order for one user: the discount their tier earns and
//! what the parcel would cost to ship at home and abroad.
//!
//! ## User Workflow
//! ```text
//! User { id: "7", name: "Ana", tier: "gold" }
//!      │
//!      ▼
//! Quote::for_user(&user, &params) ← THIS MODULE
//!      │
//!      ├── discount(gold, 199.99)             = 0.00
//!      ├── shipping(domestic, 12kg, 900km)     = 13.20
//!      └── shipping(international, 12kg, 900km) = 15.20
//! ```

use serde::{Deserialize, Serialize};

use crate::discount::DiscountRequest;
use crate::error::CoreResult;
use crate::shipping::ShippingRequest;
use crate::types::{ShippingType, User};
use crate::validation::validate_non_negative;
use crate::{DEFAULT_DISTANCE_KM, DEFAULT_ORDER_TOTAL, DEFAULT_WEIGHT_KG};

/// The sample order priced for every user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteParams {
    pub order_total: f64,
    pub weight_kg: f64,
    pub distance_km: f64,
}

impl QuoteParams {
    /// Checks all three values up front so a bad configuration fails before
    /// any user is priced.
    pub fn validate(&self) -> CoreResult<()> {
        validate_non_negative("order_total", self.order_total)?;
        validate_non_negative("weight_kg", self.weight_kg)?;
        validate_non_negative("distance_km", self.distance_km)?;
        Ok(())
    }
}

impl Default for QuoteParams {
    fn default() -> Self {
        QuoteParams {
            order_total: DEFAULT_ORDER_TOTAL,
            weight_kg: DEFAULT_WEIGHT_KG,
            distance_km: DEFAULT_DISTANCE_KM,
        }
    }
}

/// Pricing result for a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub user_id: String,
    pub user_name: String,
    /// Tier exactly as stored on the user record.
    pub tier: String,
    pub discount: f64,
    pub domestic_shipping: f64,
    pub international_shipping: f64,
}

impl Quote {
    pub fn for_user(user: &User, params: &QuoteParams) -> CoreResult<Self> {
        let discount = DiscountRequest::new(user.tier(), params.order_total).discount()?;
        let shipping = |shipping_type| {
            ShippingRequest::new(shipping_type, params.weight_kg, params.distance_km).cost()
        };

        Ok(Quote {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            tier: user.tier.clone(),
            discount,
            domestic_shipping: shipping(ShippingType::Domestic)?,
            international_shipping: shipping(ShippingType::International)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_close;

    #[test]
    fn test_default_params_quote() {
        let user = User::new("1", "Ana", "gold");
        let quote = Quote::for_user(&user, &QuoteParams::default()).unwrap();

        // 199.99 is under the gold threshold
        assert_eq!(quote.discount, 0.0);
        assert_close(quote.domestic_shipping, 13.2);
        assert_close(quote.international_shipping, 15.2);
        assert_eq!(quote.user_id, "1");
        assert_eq!(quote.tier, "gold");
    }

    #[test]
    fn test_silver_quote_gets_discount() {
        let user = User::new("2", "Luis", "SILVER");
        let quote = Quote::for_user(&user, &QuoteParams::default()).unwrap();
        assert_close(quote.discount, 19.999);
        assert_eq!(quote.tier, "SILVER");
    }

    #[test]
    fn test_blank_user_still_quotes() {
        let quote = Quote::for_user(&User::default(), &QuoteParams::default()).unwrap();
        assert_eq!(quote.discount, 0.0);
    }

    #[test]
    fn test_invalid_params() {
        let params = QuoteParams {
            weight_kg: -3.0,
            ..QuoteParams::default()
        };
        assert!(params.validate().is_err());
        assert!(Quote::for_user(&User::default(), &params).is_err());
        assert!(QuoteParams::default().validate().is_ok());
    }
}
