//! A single trip and its fare lifecycle.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity, World};
use log::debug;

use crate::error::RideError;
use crate::pricing::{PricingConfig, RideKind};
use crate::report::money;

/// One trip. Identity, locations, distance and kind are fixed at creation;
/// the fare stays `None` until [`Ride::calculate_fare`] runs.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Ride {
    id: String,
    pickup: String,
    dropoff: String,
    distance_miles: f64,
    kind: RideKind,
    fare: Option<f64>,
}

impl Ride {
    pub fn new(
        kind: RideKind,
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            id: id.into(),
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
            kind,
            fare: None,
        }
    }

    pub fn standard(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self::new(RideKind::Standard, id, pickup, dropoff, distance_miles)
    }

    pub fn premium(
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self::new(RideKind::Premium, id, pickup, dropoff, distance_miles)
    }

    /// Compute and store the fare, returning it. Repeating the call with the
    /// same pricing stores the same value.
    pub fn calculate_fare(&mut self, pricing: &PricingConfig) -> f64 {
        let fare = self.kind.fare(self.distance_miles, pricing);
        debug!(
            "ride {} ({}): {:.2} miles -> fare {:.2}",
            self.id, self.kind, self.distance_miles, fare
        );
        self.fare = Some(fare);
        fare
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pickup(&self) -> &str {
        &self.pickup
    }

    pub fn dropoff(&self) -> &str {
        &self.dropoff
    }

    pub fn distance_miles(&self) -> f64 {
        self.distance_miles
    }

    pub fn kind(&self) -> RideKind {
        self.kind
    }

    /// `None` until the fare has been calculated.
    pub fn fare(&self) -> Option<f64> {
        self.fare
    }

    /// The calculated fare, or [`RideError::FareNotComputed`].
    pub fn try_fare(&self) -> Result<f64, RideError> {
        self.fare.ok_or_else(|| RideError::FareNotComputed {
            ride_id: self.id.clone(),
        })
    }

    /// Printable detail block: kind header, trip fields, and the premium note.
    pub fn details(&self) -> RideDetails<'_> {
        RideDetails(self)
    }
}

/// Look up the ride behind a handle.
pub fn resolve_ride(world: &World, entity: Entity) -> Result<&Ride, RideError> {
    world
        .get::<Ride>(entity)
        .ok_or(RideError::UnknownRide(entity))
}

pub struct RideDetails<'a>(&'a Ride);

impl fmt::Display for RideDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ride = self.0;
        writeln!(f, "--- {} Ride ---", ride.kind)?;
        writeln!(f, "  Ride ID: {}", ride.id)?;
        writeln!(f, "  From: {}", ride.pickup)?;
        writeln!(f, "  To: {}", ride.dropoff)?;
        writeln!(f, "  Distance: {:.2} miles", ride.distance_miles)?;
        match ride.fare {
            Some(fare) => writeln!(f, "  Fare: {}", money(fare))?,
            None => writeln!(f, "  Fare: (not calculated)")?,
        }
        if ride.kind == RideKind::Premium {
            writeln!(f, "  (Includes premium service)")?;
        }
        Ok(())
    }
}
