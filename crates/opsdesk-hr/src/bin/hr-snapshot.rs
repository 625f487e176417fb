//! # HR Snapshot
//!
//! Prints the HR page's state as JSON, exactly what the shell would render
//! from. Useful for checking seed data and metrics without a UI.
//!
//! ## Usage
//! ```bash
//! # Seeded store, pretty JSON
//! cargo run -p opsdesk-hr --features cli --bin hr-snapshot
//!
//! # Apply a search query to the roster table
//! cargo run -p opsdesk-hr --features cli --bin hr-snapshot -- --search market
//!
//! # Inline store config (camelCase keys)
//! cargo run -p opsdesk-hr --features cli --bin hr-snapshot -- --config '{"seedOnStart": false}'
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the default filter); stdout
//! carries only the JSON document.

use std::env;

use opsdesk_hr::{Employee, HrAction, HrConfig, HrStore};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut query: Option<String> = None;
    let mut config = HrConfig::default();
    let mut compact = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--search" | "-s" => {
                if i + 1 < args.len() {
                    query = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config = serde_json::from_str(&args[i + 1])?;
                    i += 1;
                }
            }
            "--compact" => compact = true,
            "--help" | "-h" => {
                println!("Opsdesk HR Snapshot");
                println!();
                println!("Usage: hr-snapshot [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --search <QUERY>   Filter the roster like the search box");
                println!("  -c, --config <JSON>    Store config, e.g. '{{\"seedOnStart\": false}}'");
                println!("      --compact          Single-line JSON");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let mut store = HrStore::new(&config);
    if let Some(query) = query {
        store.dispatch(HrAction::SetSearch { query });
    }

    let visible = store.visible_employees();
    let visible: Vec<&Employee> = visible.iter().map(|e| e.as_ref()).collect();

    let snapshot = json!({
        "state": store.state(),
        "visibleEmployees": visible,
        "metrics": store.metrics(),
        "departmentSummaries": store.department_summaries(),
    });

    info!(visible = visible.len(), "snapshot ready");

    let out = if compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{out}");

    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched action
/// - Default: INFO, DEBUG for opsdesk crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,opsdesk_hr=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
