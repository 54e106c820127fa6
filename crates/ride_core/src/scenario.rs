//! Scenario setup: the participants and rides processed by a run.
//!
//! The default scenario is the fixed demonstration: one driver, one rider and
//! three rides of mixed kinds. A scenario can also be loaded from JSON, where
//! any omitted field falls back to the default.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::{Entity, World};
use log::info;
use serde::{Deserialize, Serialize};

use crate::driver::Driver;
use crate::error::ScenarioError;
use crate::pricing::{PricingConfig, RideKind};
use crate::ride::Ride;
use crate::rider::Rider;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSpec {
    pub id: String,
    pub name: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderSpec {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideSpec {
    pub kind: RideKind,
    pub id: String,
    pub pickup: String,
    pub dropoff: String,
    pub distance_miles: f64,
}

impl RideSpec {
    pub fn new(
        kind: RideKind,
        id: impl Into<String>,
        pickup: impl Into<String>,
        dropoff: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            pickup: pickup.into(),
            dropoff: dropoff.into(),
            distance_miles,
        }
    }

    fn to_ride(&self) -> Ride {
        Ride::new(
            self.kind,
            self.id.clone(),
            self.pickup.clone(),
            self.dropoff.clone(),
            self.distance_miles,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub driver: DriverSpec,
    pub rider: RiderSpec,
    pub pricing: PricingConfig,
    /// Processed in order.
    pub rides: Vec<RideSpec>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            driver: DriverSpec {
                id: "D101".to_string(),
                name: "James".to_string(),
                rating: 4.8,
            },
            rider: RiderSpec {
                id: "R201".to_string(),
                name: "Kate".to_string(),
            },
            pricing: PricingConfig::default(),
            rides: vec![
                RideSpec::new(RideKind::Standard, "S1001", "123 Main St", "456 Oak Ave", 5.0),
                RideSpec::new(RideKind::Premium, "P1002", "789 Pine Ln", "321 Maple Dr", 12.0),
                RideSpec::new(RideKind::Standard, "S1003", "321 Maple Dr", "123 Main St", 3.0),
            ],
        }
    }
}

impl ScenarioParams {
    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_ride(mut self, ride: RideSpec) -> Self {
        self.rides.push(ride);
        self
    }

    /// Replace the ride list.
    pub fn with_rides(mut self, rides: Vec<RideSpec>) -> Self {
        self.rides = rides;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read scenario parameters from a JSON file.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<ScenarioParams, ScenarioError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let params = ScenarioParams::from_json_str(&json)?;
    info!("loaded scenario from {} ({} rides)", path.display(), params.rides.len());
    Ok(params)
}

/// Handles to the entities spawned by [`build_scenario`]. Rides are in
/// processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub driver: Entity,
    pub rider: Entity,
    pub rides: Vec<Entity>,
}

/// Spawn the driver, rider and (unpriced) rides, and insert the pricing resource.
pub fn build_scenario(world: &mut World, params: &ScenarioParams) -> Scenario {
    world.insert_resource(params.pricing);

    let driver = world
        .spawn(Driver::new(
            params.driver.id.clone(),
            params.driver.name.clone(),
            params.driver.rating,
        ))
        .id();
    let rider = world
        .spawn(Rider::new(params.rider.id.clone(), params.rider.name.clone()))
        .id();
    let rides = params
        .rides
        .iter()
        .map(|spec| world.spawn(spec.to_ride()).id())
        .collect();

    Scenario {
        driver,
        rider,
        rides,
    }
}
