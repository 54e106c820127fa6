mod support;

use std::io::Write;

use ride_core::error::ScenarioError;
use ride_core::pricing::RideKind;
use ride_core::scenario::load_scenario;
use support::world::{default_pricing, run_to_string};

#[test]
fn scenario_file_replaces_rides_and_participants() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "driver": {{ "id": "D7", "name": "Mia", "rating": 4.2 }},
            "rider": {{ "id": "R9", "name": "Leo" }},
            "rides": [
                {{ "kind": "premium", "id": "P1", "pickup": "Dock", "dropoff": "Mall", "distance_miles": 2.0 }},
                {{ "kind": "standard", "id": "S2", "pickup": "Mall", "dropoff": "Dock", "distance_miles": 8.0 }}
            ]
        }}"#
    )
    .expect("write scenario");

    let params = load_scenario(file.path()).expect("load scenario");
    assert_eq!(params.pricing, default_pricing());
    assert_eq!(params.rides[0].kind, RideKind::Premium);

    let report = run_to_string(&params);
    assert!(report.contains("Name: Mia (ID: D7)\n"));
    assert!(report.contains("Rating: 4.20 / 5.0\n"));
    assert!(report.contains("Rider History for: Leo\n"));
    assert!(report.contains("  - Ride ID: P1, Fare: $10.00\n"));
    assert!(report.contains("  - Ride ID: S2, Fare: $12.00\n"));
    assert!(report.contains("Total Earnings: $22.00\n"));
}

#[test]
fn missing_scenario_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");

    match load_scenario(&path) {
        Err(ScenarioError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_scenario_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ \"rides\": 3 }}").expect("write scenario");

    assert!(matches!(
        load_scenario(file.path()),
        Err(ScenarioError::Parse(_))
    ));
}
