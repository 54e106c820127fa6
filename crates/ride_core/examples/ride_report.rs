//! Price the demo rides and print the driver and rider reports.
//!
//! Run with: cargo run -p ride_core --example ride_report [-- scenario.json]
//! Set RUST_LOG=debug to see fare and registration logs on stderr.

use std::io::{self, Write};
use std::process::ExitCode;

use ride_core::runner::run;
use ride_core::scenario::{load_scenario, ScenarioParams};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let params = match std::env::args().nth(1) {
        Some(path) => match load_scenario(&path) {
            Ok(params) => params,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => ScenarioParams::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = run(&params, &mut out).and_then(|_| out.flush().map_err(Into::into)) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
