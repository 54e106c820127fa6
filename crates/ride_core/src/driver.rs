//! Driver: the rides assigned to one driver and their earnings.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity, World};
use log::{debug, warn};

use crate::error::RideError;
use crate::report::{money, REPORT_RULE};
use crate::ride::resolve_ride;

#[derive(Debug, Clone, PartialEq, Component)]
pub struct Driver {
    id: String,
    name: String,
    /// 0.0 to 5.0.
    rating: f64,
    /// Shared handles into the world; the driver never owns or mutates rides.
    rides: Vec<Entity>,
}

impl Driver {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            rides: Vec::new(),
        }
    }

    /// Assign a ride. No duplicate check: adding the same ride twice counts it twice.
    pub fn add_ride(&mut self, ride: Entity) {
        self.rides.push(ride);
        debug!("driver {} assigned {:?} ({} total)", self.id, ride, self.rides.len());
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn rides(&self) -> &[Entity] {
        &self.rides
    }

    pub fn completed_rides(&self) -> usize {
        self.rides.len()
    }

    /// Sum of the current fares of every assigned ride, read fresh from the world.
    pub fn total_earnings(&self, world: &World) -> Result<f64, RideError> {
        self.rides.iter().try_fold(0.0, |total, &entity| {
            Ok::<_, RideError>(total + resolve_ride(world, entity)?.try_fare()?)
        })
    }

    /// Snapshot for the driver report.
    pub fn info(&self, world: &World) -> Result<DriverInfo<'_>, RideError> {
        let total_earnings = self.total_earnings(world).inspect_err(|err| {
            warn!("cannot report earnings for driver {}: {err}", self.id);
        })?;
        Ok(DriverInfo {
            driver: self,
            total_earnings,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverInfo<'a> {
    driver: &'a Driver,
    total_earnings: f64,
}

impl DriverInfo<'_> {
    pub fn total_earnings(&self) -> f64 {
        self.total_earnings
    }
}

impl fmt::Display for DriverInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let driver = self.driver;
        writeln!(f, "{REPORT_RULE}")?;
        writeln!(f, "Driver Info:")?;
        writeln!(f, "Name: {} (ID: {})", driver.name, driver.id)?;
        writeln!(f, "Rating: {:.2} / 5.0", driver.rating)?;
        writeln!(f, "Completed Rides: {}", driver.completed_rides())?;
        writeln!(f, "Total Earnings: {}", money(self.total_earnings))?;
        writeln!(f, "{REPORT_RULE}")
    }
}
