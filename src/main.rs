//! dashlay - CLI entry point
//!
//! Inspects and resets stored dashboard layouts and runs the layout pipeline
//! for a list of widgets from the command line.

mod commands;

#[cfg(test)]
mod cli_tests;

use clap::{Parser, Subcommand};
use dashboard_layout::config::{Config, ConfigLoader, LogLevel};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::*;

/// Dashboard layout engine
#[derive(Parser)]
#[command(name = "dashlay")]
#[command(version, about = "Dashboard layout engine")]
pub(crate) struct Cli {
    /// Configuration file (defaults to the XDG config path)
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

/// Available subcommands for the dashlay CLI
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Lay out widgets against the stored preferences and print the columns
    Layout {
        /// Dashboard id (overrides the configured one)
        #[arg(long)]
        dashboard: Option<String>,
        /// Column count (overrides the configured one)
        #[arg(long)]
        columns: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Widget ids in document order
        widgets: Vec<String>,
    },

    /// Print the stored preference document
    Show {
        /// Dashboard id (overrides the configured one)
        #[arg(long)]
        dashboard: Option<String>,
    },

    /// Clear stored preferences
    Reset {
        /// Dashboard id (overrides the configured one)
        #[arg(long, conflicts_with = "all")]
        dashboard: Option<String>,
        /// Clear every stored dashboard
        #[arg(long)]
        all: bool,
    },

    /// Manage configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Actions for the `config` subcommand.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create default configuration file
    Init {
        /// Overwrite existing configuration (creates backup)
        #[arg(long)]
        force: bool,
    },
    /// Show configuration file path
    Path,
    /// Validate configuration file
    Validate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config commands must work on a broken or missing file.
    if let Commands::Config { action } = &cli.command {
        dashboard_layout::logging::init(LogLevel::default());
        return match action {
            ConfigAction::Init { force } => run_config_init(*force),
            ConfigAction::Path => run_config_path(cli.config.as_deref()),
            ConfigAction::Validate => run_config_validate(cli.config.as_deref()),
        };
    }

    let mut config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };
    dashboard_layout::logging::init(config.logging.level);

    match cli.command {
        Commands::Layout {
            dashboard,
            columns,
            json,
            widgets,
        } => {
            apply_overrides(&mut config, dashboard, columns);
            run_layout_command(&config, &widgets, json)
        }
        Commands::Show { dashboard } => {
            apply_overrides(&mut config, dashboard, None);
            run_show_command(&config, &config.dashboard.dashboard_id)
        }
        Commands::Reset { dashboard, all } => {
            apply_overrides(&mut config, dashboard, None);
            run_reset_command(&config, &config.dashboard.dashboard_id, all)
        }
        Commands::Config { .. } => ExitCode::SUCCESS,
    }
}

fn apply_overrides(config: &mut Config, dashboard: Option<String>, columns: Option<usize>) {
    if let Some(id) = dashboard {
        config.dashboard.dashboard_id = id;
    }
    if let Some(n) = columns {
        config.dashboard.columns = n;
    }
}
