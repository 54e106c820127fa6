//! Fare rules for each ride kind.

use std::fmt;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Per-mile rate for standard rides, in currency units.
pub const STANDARD_RATE_PER_MILE: f64 = 1.50;

/// Per-mile rate for premium rides, in currency units.
pub const PREMIUM_RATE_PER_MILE: f64 = 3.00;

/// Premium rides never charge less than this.
pub const PREMIUM_MINIMUM_FARE: f64 = 10.0;

/// Service level of a ride. Fixed when the ride is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RideKind {
    Standard,
    Premium,
}

impl RideKind {
    pub fn label(self) -> &'static str {
        match self {
            RideKind::Standard => "Standard",
            RideKind::Premium => "Premium",
        }
    }

    /// Fare for a trip of `distance_miles` under this kind's policy.
    ///
    /// Standard: `distance * standard_rate_per_mile`.
    /// Premium: `max(distance * premium_rate_per_mile, premium_minimum_fare)`.
    pub fn fare(self, distance_miles: f64, pricing: &PricingConfig) -> f64 {
        match self {
            RideKind::Standard => distance_miles * pricing.standard_rate_per_mile,
            RideKind::Premium => {
                (distance_miles * pricing.premium_rate_per_mile).max(pricing.premium_minimum_fare)
            }
        }
    }
}

impl fmt::Display for RideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pricing configuration. Inserted as a world resource by `build_scenario`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Resource)]
#[serde(default)]
pub struct PricingConfig {
    pub standard_rate_per_mile: f64,
    pub premium_rate_per_mile: f64,
    pub premium_minimum_fare: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            standard_rate_per_mile: STANDARD_RATE_PER_MILE,
            premium_rate_per_mile: PREMIUM_RATE_PER_MILE,
            premium_minimum_fare: PREMIUM_MINIMUM_FARE,
        }
    }
}
