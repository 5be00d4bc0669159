use repelsim::{ScenarioConfig, Scenario};
use repelsim::run_2d;
use repelsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless the path exists as given
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Run this many frames without a window and report kinetic energy
    #[arg(long)]
    headless: Option<u64>,

    /// Time `World::step` over a range of population sizes
    #[arg(long)]
    bench: bool,

    /// Like `--bench` but print a CSV curve
    #[arg(long)]
    bench_curve: bool,
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

    debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, frames: u64) {
    info!("headless: {} frames, {} particles", frames, scenario.world.particles().len());
    let report_every = (frames / 10).max(1);

    for _ in 0..frames {
        scenario.world.step();
        let world = &scenario.world;
        if world.frame() % report_every == 0 {
            debug!(
                "frame {:6}: kinetic energy {:.6}, {} cell transfers",
                world.frame(),
                world.kinetic_energy(),
                world.last_stats().cell_transfers
            );
        }
    }

    info!(
        "headless: done after {} frames, kinetic energy {:.6}",
        scenario.world.frame(),
        scenario.world.kinetic_energy()
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }
    if args.bench_curve {
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    match args.headless {
        Some(frames) => run_headless(scenario, frames),
        None => run_2d(scenario),
    }

    Ok(())
}
