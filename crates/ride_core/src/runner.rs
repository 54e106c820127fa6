//! Demo runner: price each ride, print it, register it with the driver and
//! rider, then print the final reports.

use std::io::Write;

use bevy_ecs::prelude::{Entity, World};
use log::info;

use crate::driver::Driver;
use crate::error::{RideError, RunError};
use crate::pricing::PricingConfig;
use crate::report::SECTION_RULE;
use crate::ride::Ride;
use crate::rider::Rider;
use crate::scenario::{build_scenario, Scenario, ScenarioParams};

pub const PROCESSING_BANNER: &str = "--- Processing All Rides Polymorphically ---";
pub const FINAL_STATE_BANNER: &str = "--- Final System State ---";

/// Outcome of [`run_scenario`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub rides_processed: usize,
    pub total_earnings: f64,
}

/// Register `ride` with the rider, then pass the returned handle to the driver.
pub fn register_ride(
    world: &mut World,
    driver: Entity,
    rider: Entity,
    ride: Entity,
) -> Result<(), RideError> {
    let ride = world
        .get_mut::<Rider>(rider)
        .ok_or(RideError::UnknownParticipant(rider))?
        .request_ride(ride);
    world
        .get_mut::<Driver>(driver)
        .ok_or(RideError::UnknownParticipant(driver))?
        .add_ride(ride);
    Ok(())
}

/// Price one ride with the world's pricing, print its details and a
/// separator, and register it with the scenario's driver and rider.
///
/// Fails with [`RunError::MissingPricing`] if no `PricingConfig` resource
/// has been inserted.
pub fn process_ride<W: Write>(
    world: &mut World,
    scenario: &Scenario,
    ride: Entity,
    out: &mut W,
) -> Result<f64, RunError> {
    let pricing = world
        .get_resource::<PricingConfig>()
        .copied()
        .ok_or(RunError::MissingPricing)?;

    let fare = {
        let mut entry = world
            .get_mut::<Ride>(ride)
            .ok_or(RideError::UnknownRide(ride))?;
        let fare = entry.calculate_fare(&pricing);
        write!(out, "{}", entry.details())?;
        fare
    };
    writeln!(out, "{SECTION_RULE}")?;

    register_ride(world, scenario.driver, scenario.rider, ride)?;
    Ok(fare)
}

/// Process every ride of `scenario` in order and print the driver and rider reports.
pub fn run_scenario<W: Write>(
    world: &mut World,
    scenario: &Scenario,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    info!("processing {} rides", scenario.rides.len());

    writeln!(out, "{PROCESSING_BANNER}")?;
    writeln!(out)?;
    for &ride in &scenario.rides {
        process_ride(world, scenario, ride, out)?;
    }

    writeln!(out)?;
    writeln!(out, "{FINAL_STATE_BANNER}")?;
    writeln!(out)?;

    let driver = world
        .get::<Driver>(scenario.driver)
        .ok_or(RideError::UnknownParticipant(scenario.driver))?;
    let driver_info = driver.info(world)?;
    write!(out, "{driver_info}")?;

    let rider = world
        .get::<Rider>(scenario.rider)
        .ok_or(RideError::UnknownParticipant(scenario.rider))?;
    let history = rider.history(world)?;
    write!(out, "{history}")?;

    let summary = RunSummary {
        rides_processed: scenario.rides.len(),
        total_earnings: driver_info.total_earnings(),
    };
    info!(
        "run complete: {} rides, driver earnings {:.2}, rider spent {:.2}",
        summary.rides_processed,
        summary.total_earnings,
        history.total_spent()
    );
    Ok(summary)
}

/// Build `params` into a fresh world and run it.
pub fn run<W: Write>(params: &ScenarioParams, out: &mut W) -> Result<RunSummary, RunError> {
    let mut world = World::new();
    let scenario = build_scenario(&mut world, params);
    run_scenario(&mut world, &scenario, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::RideKind;
    use crate::scenario::RideSpec;

    #[test]
    fn process_ride_prices_prints_and_registers() {
        let mut world = World::new();
        let scenario = build_scenario(&mut world, &ScenarioParams::default());
        let ride = scenario.rides[1];

        let mut out = Vec::new();
        let fare = process_ride(&mut world, &scenario, ride, &mut out).expect("process ride");

        assert_eq!(fare, 36.0);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("--- Premium Ride ---\n"));
        assert!(text.ends_with("  (Includes premium service)\n---------------------------\n"));

        let driver = world.get::<Driver>(scenario.driver).expect("driver");
        let rider = world.get::<Rider>(scenario.rider).expect("rider");
        assert_eq!(driver.rides(), &[ride]);
        assert_eq!(rider.rides(), &[ride]);
    }

    #[test]
    fn run_summary_totals_driver_earnings() {
        let mut out = Vec::new();
        let summary = run(&ScenarioParams::default(), &mut out).expect("run");
        assert_eq!(
            summary,
            RunSummary {
                rides_processed: 3,
                total_earnings: 48.0,
            }
        );
    }

    #[test]
    fn empty_scenario_still_prints_reports() {
        let params = ScenarioParams::default().with_rides(Vec::new());
        let mut out = Vec::new();
        let summary = run(&params, &mut out).expect("run");
        assert_eq!(summary.rides_processed, 0);
        assert_eq!(summary.total_earnings, 0.0);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Completed Rides: 0\n"));
        assert!(text.contains("Total Rides: 0\n"));
    }

    #[test]
    fn register_ride_rejects_unknown_participants() {
        let mut world = World::new();
        let scenario = build_scenario(&mut world, &ScenarioParams::default());
        world.despawn(scenario.rider);

        let result = register_ride(&mut world, scenario.driver, scenario.rider, scenario.rides[0]);
        assert_eq!(result, Err(RideError::UnknownParticipant(scenario.rider)));
    }

    #[test]
    fn process_ride_requires_pricing_resource() {
        let mut world = World::new();
        let scenario = build_scenario(&mut world, &ScenarioParams::default());
        world.remove_resource::<PricingConfig>();

        let mut out = Vec::new();
        let result = process_ride(&mut world, &scenario, scenario.rides[0], &mut out);

        assert!(matches!(result, Err(RunError::MissingPricing)));
        assert!(out.is_empty());
        let ride = world.get::<Ride>(scenario.rides[0]).expect("ride");
        assert_eq!(ride.fare(), None);
        let driver = world.get::<Driver>(scenario.driver).expect("driver");
        assert_eq!(driver.completed_rides(), 0);
    }

    #[test]
    fn process_ride_uses_world_pricing() {
        let params = ScenarioParams::default()
            .with_rides(vec![RideSpec::new(RideKind::Premium, "P1", "A", "B", 1.0)])
            .with_pricing(PricingConfig {
                premium_minimum_fare: 15.0,
                ..Default::default()
            });
        let mut world = World::new();
        let scenario = build_scenario(&mut world, &params);

        let mut out = Vec::new();
        let fare = process_ride(&mut world, &scenario, scenario.rides[0], &mut out)
            .expect("process ride");
        assert_eq!(fare, 15.0);
    }
}
