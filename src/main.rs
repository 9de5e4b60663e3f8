use gravsim::{Scenario, ScenarioConfig};
use gravsim::run;

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "binary_star.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;

    let mut scenario = Scenario::build_scenario(scenario_cfg);
    run(&mut scenario);

    // Final state summary
    let com = scenario.system.center_of_mass();
    println!(
        "finished at tick {}: {} bodies, com = ({:.3}, {:.3}, {:.3})",
        scenario.system.tick,
        scenario.system.bodies.len(),
        com.x,
        com.y,
        com.z
    );
    for (i, b) in scenario.system.bodies.iter().enumerate() {
        println!(
            "body {i}: x = ({:.3}, {:.3}, {:.3}), |v| = {:.3}, m = {:.4e}, r = {:.3}",
            b.x.x,
            b.x.y,
            b.x.z,
            b.v.norm(),
            b.m,
            b.radius
        );
    }

    //bench_gravity();
    //bench_euler_curve();

    Ok(())
}
