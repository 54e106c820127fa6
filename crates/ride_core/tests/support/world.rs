use bevy_ecs::prelude::World;
use ride_core::pricing::PricingConfig;
use ride_core::scenario::{build_scenario, Scenario, ScenarioParams};

/// Build `params` into a fresh world.
pub fn scenario_world(params: &ScenarioParams) -> (World, Scenario) {
    let mut world = World::new();
    let scenario = build_scenario(&mut world, params);
    (world, scenario)
}

/// Run `params` and capture everything written to the report.
pub fn run_to_string(params: &ScenarioParams) -> String {
    let mut out = Vec::new();
    ride_core::runner::run(params, &mut out).expect("scenario should run");
    String::from_utf8(out).expect("report should be utf8")
}

pub fn default_pricing() -> PricingConfig {
    PricingConfig::default()
}
