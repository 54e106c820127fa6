//! Rider: the append-only history of requested rides.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity, World};
use log::{debug, warn};

use crate::error::RideError;
use crate::report::{money, REPORT_RULE, SECTION_RULE};
use crate::ride::resolve_ride;

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Rider {
    id: String,
    name: String,
    rides: Vec<Entity>,
}

impl Rider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rides: Vec::new(),
        }
    }

    /// Record a requested ride and hand the same handle back, so the call can
    /// be chained into `Driver::add_ride`.
    pub fn request_ride(&mut self, ride: Entity) -> Entity {
        self.rides.push(ride);
        debug!("rider {} requested {:?} ({} total)", self.id, ride, self.rides.len());
        ride
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rides(&self) -> &[Entity] {
        &self.rides
    }

    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }

    /// Resolve every requested ride into an id/fare line for the history report.
    pub fn history<'w>(&'w self, world: &'w World) -> Result<RiderHistory<'w>, RideError> {
        let entries = self
            .rides
            .iter()
            .map(|&entity| {
                let ride = resolve_ride(world, entity)?;
                Ok(HistoryEntry {
                    ride_id: ride.id(),
                    fare: ride.try_fare()?,
                })
            })
            .collect::<Result<Vec<_>, RideError>>()
            .inspect_err(|err| {
                warn!("cannot report history for rider {}: {err}", self.id);
            })?;
        Ok(RiderHistory {
            rider: self,
            entries,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry<'a> {
    pub ride_id: &'a str,
    pub fare: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiderHistory<'a> {
    rider: &'a Rider,
    entries: Vec<HistoryEntry<'a>>,
}

impl<'a> RiderHistory<'a> {
    pub fn entries(&self) -> &[HistoryEntry<'a>] {
        &self.entries
    }

    /// Sum of fares across the history, duplicates included.
    pub fn total_spent(&self) -> f64 {
        self.entries.iter().map(|entry| entry.fare).sum()
    }
}

impl fmt::Display for RiderHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_RULE}")?;
        writeln!(f, "Rider History for: {}", self.rider.name)?;
        writeln!(f, "Total Rides: {}", self.entries.len())?;
        writeln!(f, "{SECTION_RULE}")?;
        for entry in &self.entries {
            writeln!(f, "  - Ride ID: {}, Fare: {}", entry.ride_id, money(entry.fare))?;
        }
        writeln!(f, "{REPORT_RULE}")
    }
}
