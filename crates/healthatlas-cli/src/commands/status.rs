//! Status command - show what ingestion kept, excluded and imputed.

use colored::Colorize;
use healthatlas::Indicator;

use crate::cli::IngestArgs;

pub fn run(
    ingest: IngestArgs,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = super::load(&ingest)?;
    let summary = loaded.summary();

    if json_output {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Dataset status for".cyan().bold(),
        summary.source.file.white()
    );
    println!(
        "  Format: {}  Size: {} bytes  Hash: {}",
        summary.source.format,
        summary.source.size_bytes,
        summary.source.hash.dimmed()
    );
    println!(
        "  Ingested: {}",
        summary.source.ingested_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    println!("{}", "Records:".yellow().bold());
    println!("  Read:               {}", summary.normalize.rows_in);
    println!("  Duplicates removed: {}", summary.normalize.duplicates_removed);
    println!(
        "  Unresolved:         {}",
        summary.resolve.unresolved_rows.to_string().red()
    );
    println!(
        "  Outside allow-list: {}",
        summary.resolve.disallowed_rows.to_string().red()
    );
    println!("  Canonical:          {}", summary.rows.to_string().green());
    println!();

    println!("{}", "Imputation:".yellow().bold());
    if summary.normalize.imputations.is_empty() {
        println!("  No missing numeric values");
    }
    for imputation in &summary.normalize.imputations {
        println!(
            "  {}: {} values filled with median {}",
            imputation.column, imputation.values_filled, imputation.median
        );
    }
    println!();

    println!("{}", "Indicators:".yellow().bold());
    for indicator in Indicator::ALL {
        let marker = if summary.available_indicators.contains(&indicator) {
            "present".green()
        } else {
            "missing".red()
        };
        println!("  {:<22} {}", indicator.column(), marker);
    }

    Ok(())
}
