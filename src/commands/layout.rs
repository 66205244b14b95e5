//! `dashlay layout`: run the initialization pipeline and print the result.

use dashboard_layout::config::Config;
use dashboard_layout::{Column, Dashboard, PreferenceStore, Widget, WidgetSpec};
use serde_json::json;
use std::process::ExitCode;

/// Lays out `widget_ids` (document order) against the stored preferences of
/// the configured dashboard. Nothing is written back.
pub(crate) fn run_layout_command(config: &Config, widget_ids: &[String], as_json: bool) -> ExitCode {
    let file_store = match config.store.file_store() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let widgets = widget_ids
        .iter()
        .map(|id| WidgetSpec::new(id.as_str()).with_id(id.as_str()))
        .collect();
    let store = PreferenceStore::with_fallback(file_store);
    let dashboard = match Dashboard::new(config.dashboard.clone(), store, widgets) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&layout_json(&dashboard)) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: failed to format layout: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", layout_text(&dashboard));
    }
    ExitCode::SUCCESS
}

fn layout_json(dashboard: &Dashboard) -> serde_json::Value {
    let columns: Vec<_> = dashboard
        .layout()
        .iter()
        .map(|column: &Column<Widget>| {
            let widgets: Vec<_> = column
                .items
                .iter()
                .map(|w| json!({ "id": w.id, "collapsed": w.collapsed, "disabled": w.disabled }))
                .collect();
            json!({ "width_percent": column.width_percent, "widgets": widgets })
        })
        .collect();
    let panel: Vec<_> = dashboard
        .panel()
        .entries()
        .iter()
        .map(|e| e.widget_id.as_str())
        .collect();
    json!({
        "dashboard": dashboard.options().dashboard_id,
        "columns": columns,
        "panel": panel,
    })
}

fn layout_text(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for (i, column) in dashboard.layout().iter().enumerate() {
        let cells: Vec<String> = column
            .items
            .iter()
            .map(|w| {
                let mut cell = w.id.clone();
                if w.collapsed {
                    cell.push_str(" [collapsed]");
                }
                if w.disabled {
                    cell.push_str(" [disabled]");
                }
                cell
            })
            .collect();
        let body = if cells.is_empty() {
            "(empty)".to_string()
        } else {
            cells.join(", ")
        };
        out.push_str(&format!(
            "column {} ({}%): {}\n",
            i + 1,
            column.width_percent,
            body
        ));
    }
    if !dashboard.panel().is_empty() {
        let removed: Vec<&str> = dashboard
            .panel()
            .entries()
            .iter()
            .map(|e| e.widget_id.as_str())
            .collect();
        out.push_str(&format!("panel: {}\n", removed.join(", ")));
    }
    out
}
