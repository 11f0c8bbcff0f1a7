//! # Shipping Module
//!
//! Shipping cost by shipping type, parcel weight and distance.
//!
//! ## Formula
//! ```text
//! cost = base_fee(type) + weight_kg * 0.3 + distance_km / 250 + surcharge
//!
//!                    base fee   heavy surcharge
//!   domestic          6.00       +2.00 when weight >  15 kg
//!   international     8.00       +3.00 when weight >= 15 kg
//! ```
//!
//! The two heavy-parcel boundaries differ: a 15 kg domestic parcel is not
//! heavy, a 15 kg international parcel is.

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::ShippingType;
use crate::validation::validate_non_negative;

pub const BASE_DOMESTIC_FEE: f64 = 6.0;
pub const BASE_INTERNATIONAL_FEE: f64 = 8.0;

pub const WEIGHT_FACTOR_PER_KG: f64 = 0.3;
pub const DISTANCE_DIVISOR_KM: f64 = 250.0;

pub const HEAVY_WEIGHT_THRESHOLD_KG: f64 = 15.0;
pub const DOMESTIC_HEAVY_SURCHARGE: f64 = 2.0;
pub const INTERNATIONAL_HEAVY_SURCHARGE: f64 = 3.0;

/// A request to price one parcel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingRequest {
    pub shipping_type: ShippingType,
    pub weight_kg: f64,
    pub distance_km: f64,
}

impl ShippingRequest {
    pub fn new(shipping_type: ShippingType, weight_kg: f64, distance_km: f64) -> Self {
        ShippingRequest {
            shipping_type,
            weight_kg,
            distance_km,
        }
    }

    /// Returns the total shipping cost.
    ///
    /// ## Errors
    /// `CoreError::InvalidArgument` if weight or distance is negative or NaN.
    pub fn cost(&self) -> CoreResult<f64> {
        let weight = validate_non_negative("weight_kg", self.weight_kg)?;
        let distance = validate_non_negative("distance_km", self.distance_km)?;

        let base_fee = match self.shipping_type {
            ShippingType::Domestic => BASE_DOMESTIC_FEE,
            ShippingType::International => BASE_INTERNATIONAL_FEE,
        };

        let variable = weight * WEIGHT_FACTOR_PER_KG + distance / DISTANCE_DIVISOR_KM;

        Ok(base_fee + variable + heavy_surcharge(self.shipping_type, weight))
    }
}

fn heavy_surcharge(shipping_type: ShippingType, weight: f64) -> f64 {
    match shipping_type {
        ShippingType::Domestic if weight > HEAVY_WEIGHT_THRESHOLD_KG => DOMESTIC_HEAVY_SURCHARGE,
        ShippingType::International if weight >= HEAVY_WEIGHT_THRESHOLD_KG => {
            INTERNATIONAL_HEAVY_SURCHARGE
        }
        _ => 0.0,
    }
}

/// Computes the shipping cost for one parcel.
///
/// ## Example
/// ```rust
/// use pricing_core::{compute_shipping_cost, ShippingType};
///
/// let cost = compute_shipping_cost(ShippingType::International, 15.0, 0.0).unwrap();
/// assert!((cost - 15.5).abs() < 1e-9);
/// ```
pub fn compute_shipping_cost(
    shipping_type: ShippingType,
    weight_kg: f64,
    distance_km: f64,
) -> CoreResult<f64> {
    ShippingRequest::new(shipping_type, weight_kg, distance_km).cost()
}

// =============================================================================
// Unit Tests
// =============================================================================
