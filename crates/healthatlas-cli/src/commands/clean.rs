//! Clean command - normalize a raw file and write the canonical cache.

use std::path::PathBuf;

use colored::Colorize;
use healthatlas::HealthAtlas;

use crate::cli::IngestArgs;

pub fn run(
    ingest: IngestArgs,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !ingest.file.exists() {
        return Err(format!("File not found: {}", ingest.file.display()).into());
    }

    println!("{} {}", "Cleaning".cyan().bold(), ingest.file.display());

    let atlas = HealthAtlas::with_config(ingest.config()?);
    let (loaded, path) = atlas.clean_to_cache(&ingest.file, output.as_deref())?;

    let normalize = &loaded.normalize;
    println!();
    println!("{}", "Normalization:".yellow().bold());
    println!("  Rows read:          {}", normalize.rows_in);
    println!(
        "  Duplicates removed: {}",
        normalize.duplicates_removed.to_string().white()
    );
    println!(
        "  Values imputed:     {}",
        normalize.values_imputed().to_string().white()
    );
    if verbose {
        for renamed in &normalize.renamed_columns {
            println!("    {} -> {}", renamed.from.dimmed(), renamed.to);
        }
        for imputation in &normalize.imputations {
            println!(
                "    {}: {} filled with median {}",
                imputation.column, imputation.values_filled, imputation.median
            );
        }
    }

    let resolve = &loaded.resolve;
    println!();
    println!("{}", "Resolution:".yellow().bold());
    println!("  Records kept:       {}", resolve.rows_out.to_string().green());
    println!("  Records excluded:   {}", resolve.excluded().to_string().red());
    if verbose && !resolve.unresolved_countries.is_empty() {
        let names: Vec<&str> = resolve
            .unresolved_countries
            .iter()
            .map(String::as_str)
            .collect();
        println!("    Unresolved: {}", names.join(", "));
    }

    println!();
    println!(
        "{} {}",
        "Cached dataset written to".green(),
        path.display().to_string().white().bold()
    );

    Ok(())
}
