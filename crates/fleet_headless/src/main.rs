//! Headless fleet runner.
//!
//! Runs the greenkeeping fleet without the game attached: loads a
//! scenario, ticks the core for the scripted duration, and prints the
//! run metrics. Used for tuning scheduler constants and CI smoke runs.
//!
//! # Usage
//!
//! ```bash
//! # Run the built-in Nine Holes scenario
//! cargo run -p fleet_headless -- run
//!
//! # Run a custom scenario with overrides
//! cargo run -p fleet_headless -- run --scenario my_course.ron --ticks 500 --fleet-ai
//!
//! # Machine-readable output
//! cargo run -p fleet_headless -- run --json
//!
//! # Print the default scenario as a RON template
//! cargo run -p fleet_headless -- template
//! ```
//!
//! Logs go to stderr; metrics go to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fleet_headless::runner;
use fleet_headless::scenario::Scenario;

#[derive(Parser)]
#[command(name = "fleet_headless")]
#[command(about = "Headless greenkeeping fleet runner for tuning and CI")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario and print its metrics
    Run {
        /// Scenario RON file; defaults to the built-in Nine Holes course
        #[arg(short, long)]
        scenario: Option<PathBuf>,

        /// Override the scenario's tick count
        #[arg(long)]
        ticks: Option<u32>,

        /// Override the scenario's RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Force the fleet-AI breakdown-reduction upgrade on
        #[arg(long)]
        fleet_ai: bool,

        /// Print metrics as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Print the default scenario as a RON template
    Template,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs to stderr; stdout is for metrics output. RUST_LOG overrides
    // the verbosity flag.
    let fallback = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            ticks,
            seed,
            fleet_ai,
            json,
        } => cmd_run(scenario, ticks, seed, fleet_ai, json),
        Commands::Template => cmd_template(),
    }
}

fn cmd_run(
    path: Option<PathBuf>,
    ticks: Option<u32>,
    seed: Option<u64>,
    fleet_ai: bool,
    json: bool,
) -> ExitCode {
    let mut scenario = match path {
        Some(path) => match Scenario::load(&path) {
            Ok(scenario) => scenario,
            Err(err) => {
                eprintln!("Error loading scenario: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Scenario::default(),
    };

    if let Some(ticks) = ticks {
        scenario.ticks = ticks;
    }
    if let Some(seed) = seed {
        scenario.seed = seed;
    }
    if fleet_ai {
        scenario.fleet_ai = true;
    }

    tracing::info!(name = %scenario.name, ticks = scenario.ticks, "starting run");

    let metrics = match runner::run(&scenario) {
        Ok(metrics) => metrics,
        Err(err) => {
            eprintln!("Run failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&metrics) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("Failed to serialize metrics: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&scenario, &metrics);
    }
    ExitCode::SUCCESS
}

fn print_summary(scenario: &Scenario, metrics: &runner::RunMetrics) {
    println!("=== {} ===", scenario.name);
    println!(
        "Ticks: {} x {:.1} min ({:.1} simulated hours)",
        metrics.ticks_run,
        scenario.delta_minutes,
        f64::from(metrics.ticks_run) * f64::from(scenario.delta_minutes) / 60.0
    );
    println!(
        "Fleet: {} total ({} working, {} idle, {} charging, {} broken)",
        metrics.final_status.total,
        metrics.final_status.working,
        metrics.final_status.idle,
        metrics.final_status.charging,
        metrics.final_status.broken
    );
    for (kind, count) in &metrics.effects_by_kind {
        println!("Effects ({kind}): {count}");
    }
    println!("Breakdowns: {}", metrics.breakdowns);
    println!("Operating cost: ${:.2}", metrics.total_operating_cost);
    println!(
        "Course averages: health {:.1}, moisture {:.1}, nutrients {:.1}",
        metrics.final_avg_health, metrics.final_avg_moisture, metrics.final_avg_nutrients
    );
}

fn cmd_template() -> ExitCode {
    let scenario = Scenario::default();
    match ron::ser::to_string_pretty(&scenario, ron::ser::PrettyConfig::default()) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize scenario: {err}");
            ExitCode::FAILURE
        }
    }
}
