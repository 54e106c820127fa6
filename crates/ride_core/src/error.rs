//! Crate-level error types for ride_core.

use std::path::PathBuf;

use bevy_ecs::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RideError {
    #[error("fare for ride {ride_id} has not been calculated")]
    FareNotComputed { ride_id: String },

    #[error("no ride found for entity {0:?}")]
    UnknownRide(Entity),

    #[error("no driver or rider found for entity {0:?}")]
    UnknownParticipant(Entity),
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Ride(#[from] RideError),

    #[error("no PricingConfig resource in the world")]
    MissingPricing,

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
