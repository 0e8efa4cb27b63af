use trailsim::{prompt_bodies, run_2d, ScenarioConfig, SimulationLoop, StepOutcome};
use trailsim::{bench_gravity, bench_step};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Gravitational N-body simulation with trails")]
struct Args {
    /// Scenario YAML; looked up as given, then under `scenarios/`.
    /// Without it the configuration is asked for on the console.
    #[arg(short, long = "file")]
    file_name: Option<String>,

    /// Seed for reproducible initial conditions, overrides the scenario
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many steps without a window and print the final state
    #[arg(long)]
    headless: Option<u64>,

    /// Print force and step timings instead of simulating
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn load_scenario_from_console() -> Result<ScenarioConfig> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let bodies = prompt_bodies(&mut input, &mut out)?;
    Ok(ScenarioConfig::from_bodies(bodies))
}

fn run_headless(mut sim: SimulationLoop, steps: u64) {
    for _ in 0..steps {
        if sim.step() == StepOutcome::Restarted {
            info!("generation {} after {} restarts", sim.generation().id, sim.restarts());
        }
    }

    let snapshot = sim.snapshot();
    println!("generation {} after {} steps:", snapshot.generation, steps);
    for (i, b) in snapshot.bodies.iter().enumerate() {
        println!(
            "  body {}: x = ({:9.3}, {:9.3}), trail = {}",
            i + 1,
            b.position.x,
            b.position.y,
            b.trail.len()
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench || args.headless.is_some() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let mut scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => load_scenario_from_console()?,
    };
    if let Some(seed) = args.seed {
        if scenario_cfg.parameters.seed.is_some() {
            warn!("--seed {seed} overrides the scenario seed");
        }
        scenario_cfg.parameters.seed = Some(seed);
    }

    let fps = scenario_cfg.viewport.fps;
    let sim = SimulationLoop::from_config(&scenario_cfg).context("invalid scenario")?;

    match args.headless {
        Some(steps) => run_headless(sim, steps),
        None => run_2d(sim, fps),
    }

    Ok(())
}
