//! CLI argument parsing tests.

use crate::{Cli, Commands, ConfigAction};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn layout_collects_widget_ids_in_order() {
    let cli = Cli::try_parse_from(["dashlay", "layout", "c", "a", "b"]).unwrap();
    match cli.command {
        Commands::Layout {
            widgets,
            dashboard,
            columns,
            json,
        } => {
            assert_eq!(widgets, vec!["c", "a", "b"]);
            assert_eq!(dashboard, None);
            assert_eq!(columns, None);
            assert!(!json);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn layout_overrides() {
    let cli = Cli::try_parse_from([
        "dashlay",
        "layout",
        "--dashboard",
        "ops",
        "--columns",
        "3",
        "--json",
        "a",
    ])
    .unwrap();
    match cli.command {
        Commands::Layout {
            dashboard,
            columns,
            json,
            ..
        } => {
            assert_eq!(dashboard.as_deref(), Some("ops"));
            assert_eq!(columns, Some(3));
            assert!(json);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn layout_rejects_non_numeric_columns() {
    let result = Cli::try_parse_from(["dashlay", "layout", "--columns", "two", "a"]);
    assert!(result.is_err());
}

#[test]
fn reset_dashboard_conflicts_with_all() {
    let result = Cli::try_parse_from(["dashlay", "reset", "--dashboard", "x", "--all"]);
    assert!(result.is_err());
}

#[test]
fn reset_all_flag() {
    let cli = Cli::try_parse_from(["dashlay", "reset", "--all"]).unwrap();
    assert!(matches!(cli.command, Commands::Reset { all: true, dashboard: None }));
}

#[test]
fn global_config_flag_after_subcommand() {
    let cli = Cli::try_parse_from(["dashlay", "show", "--config", "/tmp/dash.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/dash.toml")));
    assert!(matches!(cli.command, Commands::Show { dashboard: None }));
}

#[test]
fn config_init_force_flag() {
    let cli = Cli::try_parse_from(["dashlay", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn config_without_action_fails() {
    assert!(Cli::try_parse_from(["dashlay", "config"]).is_err());
}
