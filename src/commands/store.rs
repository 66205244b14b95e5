//! Stored preference commands: `show` and `reset`.

use dashboard_layout::config::Config;
use std::process::ExitCode;

/// Prints the stored preference document of `dashboard_id`.
pub(crate) fn run_show_command(config: &Config, dashboard_id: &str) -> ExitCode {
    let store = match config.store.file_store() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match store.read(dashboard_id) {
        Ok(Some(document)) => match serde_json::to_string_pretty(&document) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to format preferences: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => {
            println!("No stored preferences for '{dashboard_id}'");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Clears stored preferences for one dashboard, or all of them.
pub(crate) fn run_reset_command(config: &Config, dashboard_id: &str, all: bool) -> ExitCode {
    let store = match config.store.file_store() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if all {
        store.clear_all().map(|removed| {
            println!("Removed {removed} stored dashboard(s) from {}", store.dir().display());
        })
    } else {
        store.clear(dashboard_id).map(|existed| {
            if existed {
                println!("Removed stored preferences for '{dashboard_id}'");
            } else {
                println!("No stored preferences for '{dashboard_id}'");
            }
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
