use gravsim::{bench_gravity, bench_step, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "sun_earth.yaml")]
    file_name: String,

    /// Run the wall-clock benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    let e0 = scenario.simulator.energy();
    let solution = scenario.run()?;
    let e1 = scenario.simulator.energy();

    let system = scenario.simulator.system();
    println!("bodies:      {} ({} massive)", system.len(), system.massive_count());
    println!("integrator:  {}", scenario.engine.integrator);
    println!("final time:  {} days", system.t);
    println!("snapshots:   {}", solution.len());
    println!("energy:      {e0} -> {e1}");
    println!("max |dE/E0|: {:e}", solution.max_energy_drift());

    if !e1.is_finite() {
        println!("warning: non-finite energy; check initial conditions for coincident bodies");
    }

    Ok(())
}
