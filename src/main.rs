use std::process::ExitCode;

use log::{error, info, LevelFilter};

use sweep_elevator::modules;
use sweep_elevator::utilities::config::Config;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    info!("Program startup!");

    // READ CONFIGURATION
    let config = match Config::get() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match modules::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
