use solsim::{Scenario, ScenarioConfig, Simulation};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D solar system gravity simulation")]
struct Args {
    /// Scenario YAML; bare names are looked up in the crate's scenarios/ directory.
    /// Uses the built-in solar system when omitted.
    #[arg(short, long)]
    file: Option<String>,

    /// Run without a window
    #[arg(long)]
    headless: bool,

    /// Number of steps (days) to run in headless mode
    #[arg(long, default_value_t = 365)]
    steps: u64,

    /// Log distances to the star every this many steps in headless mode
    #[arg(long, default_value_t = 30)]
    report_every: u64,
}

fn resolve_scenario_path(name: &str) -> PathBuf {
    let direct = PathBuf::from(name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    match &args.file {
        Some(name) => {
            let path = resolve_scenario_path(name);
            ScenarioConfig::from_path(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))
        }
        None => Ok(ScenarioConfig::solar_system()),
    }
}

fn report(sim: &Simulation) {
    for (i, body) in sim.bodies().iter().enumerate() {
        if let Some(d) = sim.distance_to_star(i) {
            info!(
                day = sim.elapsed_days(),
                body = %body.name,
                distance_au = d / sim.parameters().au,
                "distance to star"
            );
        }
    }
}

fn run_headless(mut sim: Simulation, steps: u64, report_every: u64) -> Result<()> {
    for _ in 0..steps {
        sim.advance()
            .with_context(|| format!("step {} failed", sim.steps() + 1))?;
        if report_every > 0 && sim.steps() % report_every == 0 {
            report(&sim);
        }
    }
    info!(steps = sim.steps(), days = sim.elapsed_days(), "done");
    report(&sim);
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[cfg(feature = "visualization")]
fn run_windowed(scenario: Scenario) -> Result<()> {
    // Bevy's LogPlugin installs its own subscriber
    match solsim::run_2d(scenario) {
        bevy::app::AppExit::Success => Ok(()),
        bevy::app::AppExit::Error(code) => Err(anyhow::anyhow!("viewer exited with code {code}")),
    }
}

#[cfg(not(feature = "visualization"))]
fn run_windowed(_scenario: Scenario) -> Result<()> {
    anyhow::bail!("built without the `visualization` feature; use --headless")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(cfg).context("invalid scenario")?;

    if args.headless {
        init_logging();
        run_headless(scenario.simulation, args.steps, args.report_every)
    } else {
        run_windowed(scenario)
    }
}
