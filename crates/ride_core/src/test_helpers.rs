//! Test helpers for common test setup and utilities.

use bevy_ecs::prelude::{Entity, World};

use crate::driver::Driver;
use crate::pricing::{PricingConfig, RideKind};
use crate::ride::Ride;
use crate::rider::Rider;

/// Create a world holding the default pricing resource.
pub fn create_test_world() -> World {
    let mut world = World::new();
    world.insert_resource(PricingConfig::default());
    world
}

/// Spawn a ride whose fare has not been calculated.
pub fn spawn_ride(world: &mut World, kind: RideKind, id: &str, distance_miles: f64) -> Entity {
    world
        .spawn(Ride::new(kind, id, "Pickup St", "Dropoff Ave", distance_miles))
        .id()
}

/// Spawn a ride and calculate its fare with the world's pricing.
///
/// # Panics
///
/// Panics if the world has no `PricingConfig` resource; use [`create_test_world`].
pub fn spawn_priced_ride(
    world: &mut World,
    kind: RideKind,
    id: &str,
    distance_miles: f64,
) -> Entity {
    let pricing = *world.resource::<PricingConfig>();
    let mut ride = Ride::new(kind, id, "Pickup St", "Dropoff Ave", distance_miles);
    ride.calculate_fare(&pricing);
    world.spawn(ride).id()
}

pub fn spawn_driver(world: &mut World) -> Entity {
    world.spawn(Driver::new("D-test", "Test Driver", 5.0)).id()
}

pub fn spawn_rider(world: &mut World) -> Entity {
    world.spawn(Rider::new("R-test", "Test Rider")).id()
}

/// Current fare of `ride`.
///
/// # Panics
///
/// Panics if the entity is not a ride.
pub fn fare_of(world: &World, ride: Entity) -> Option<f64> {
    world
        .get::<Ride>(ride)
        .expect("entity should be a ride")
        .fare()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_ride_leaves_fare_uncalculated() {
        let mut world = create_test_world();
        let ride = spawn_ride(&mut world, RideKind::Standard, "S1", 4.0);
        assert_eq!(fare_of(&world, ride), None);
    }

    #[test]
    fn spawn_priced_ride_uses_world_pricing() {
        let mut world = create_test_world();
        world.insert_resource(PricingConfig {
            standard_rate_per_mile: 2.0,
            ..Default::default()
        });
        let ride = spawn_priced_ride(&mut world, RideKind::Standard, "S1", 4.0);
        assert_eq!(fare_of(&world, ride), Some(8.0));
    }
}
