//! Example: Load a health dataset and print every view for each indicator.
//!
//! Usage:
//!   cargo run --example dashboard -- <file_path>
//!
//! Example:
//!   cargo run --example dashboard -- test_data/african_health_sample.csv

use std::env;
use std::path::Path;

use healthatlas::{HealthAtlas, Indicator, Panel, ViewResult};

fn main() -> healthatlas::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example dashboard -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example dashboard -- test_data/african_health_sample.csv");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    if !path.exists() {
        eprintln!("Error: File not found: {}", path.display());
        std::process::exit(1);
    }

    let loaded = HealthAtlas::new().load(path)?;
    println!(
        "Loaded {} records ({} excluded)",
        loaded.dataset.len(),
        loaded.resolve.excluded()
    );

    let mut dashboard = loaded.dashboard(Indicator::default());
    for indicator in Indicator::ALL {
        let frame = dashboard.select(indicator);
        println!();
        println!("== {} ==", indicator.label());

        for panel in &frame.panels {
            match panel {
                Panel::Summary { result } => match result.ok() {
                    Some(summary) => {
                        println!("{}", summary.title);
                        for (rank, entry) in summary.entries.iter().enumerate() {
                            println!("  {}. {} ({})", rank + 1, entry.country, entry.value);
                        }
                    }
                    None => println!("Summary: {}", reason(result)),
                },
                Panel::Choropleth { result } => match result.ok() {
                    Some(series) => println!("Map: {} countries", series.points.len()),
                    None => println!("Map: {}", reason(result)),
                },
                Panel::Scatter { result } => match result.ok() {
                    Some(series) => println!("Scatter: {} points", series.points.len()),
                    None => println!("Scatter: {}", reason(result)),
                },
            }
        }
    }

    Ok(())
}

fn reason<T>(result: &ViewResult<T>) -> &str {
    result.degradation().map(|d| d.reason.as_str()).unwrap_or("")
}
