//! `dashlay config` subcommands.

use dashboard_layout::config::{default, xdg, ConfigLoader};
use std::path::Path;
use std::process::ExitCode;

/// Writes the commented default configuration file.
pub(crate) fn run_config_init(force: bool) -> ExitCode {
    match default::create_default_config(force) {
        Ok(path) => {
            println!("Created configuration at {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the configuration path in effect.
pub(crate) fn run_config_path(explicit: Option<&Path>) -> ExitCode {
    match explicit {
        Some(path) => println!("{}", path.display()),
        None => println!("{}", xdg::config_path().display()),
    }
    ExitCode::SUCCESS
}

/// Parses and validates the configuration, printing the effective values.
pub(crate) fn run_config_validate(explicit: Option<&Path>) -> ExitCode {
    let result = ConfigLoader::load(explicit).and_then(|config| {
        config.validate()?;
        Ok(config)
    });
    match result {
        Ok(config) => {
            println!("Configuration is valid");
            println!("{config:#?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Config error: {e}");
            ExitCode::FAILURE
        }
    }
}
