use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride fare workspace",
    long_about = "A unified CLI for running the ride report demo, tests,\n\
                  benchmarks, and CI checks in the ride fare workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the ride report demo
    Run {
        /// Scenario JSON file replacing the built-in demo rides
        #[arg(long, env = "RIDE_SCENARIO")]
        scenario: Option<String>,
    },
    /// Run the ride_core test suite
    Test,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the example report
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_report(scenario: Option<&str>) {
    let mut args = vec!["run", "-p", "ride_core", "--example", "ride_report"];
    if let Some(path) = scenario {
        if !Path::new(path).exists() {
            eprintln!("error: scenario file '{path}' does not exist");
            exit(1);
        }
        args.extend(["--", path]);
    }
    run_cargo(&args);
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ride_core");
    run_cargo(&["test", "-p", "ride_core"]);
}

fn ci_examples() {
    step("Run ride_report (default scenario)");
    run_report(None);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "ride_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { scenario } => run_report(scenario.as_deref()),
        Commands::Test => run_cargo(&["test", "-p", "ride_core"]),
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Examples => ci_examples(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_examples();
                ci_bench();
            }
        },
    }
}
