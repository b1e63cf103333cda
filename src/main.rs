use std::{env, error::Error, fs};

use log::info;
use shock_tube_fv::{initialization, io::write_to_csv::write_to_csv, simulation::Simulation1d};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let param_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/toro_test1.json".to_string());
    let params = initialization::initialize_params_by_file(&param_path)?;
    let shock_tube = initialization::initialize_shock_tube(&params)?;
    info!(
        "{}: {} cells, membrane at {}, {:?} fluxes to t = {}",
        param_path,
        shock_tube.states().len(),
        shock_tube.membrane_location(),
        shock_tube.flux_scheme(),
        shock_tube.final_time()
    );
    fs::create_dir_all("outputs")?;
    write_to_csv(&shock_tube.fields(), "outputs/initial_condition.csv")?;
    info!("initial condition written to outputs/initial_condition.csv");
    Ok(())
}
