//! Export command - write the full canonical dataset as CSV.

use std::path::PathBuf;

use colored::Colorize;
use healthatlas::write_csv;

use crate::cli::IngestArgs;

pub fn run(
    ingest: IngestArgs,
    output: Option<PathBuf>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ingest.config()?;
    let loaded = super::load(&ingest)?;

    let path = output.unwrap_or_else(|| PathBuf::from(&config.export_file_name));
    write_csv(&loaded.dataset, &path)?;

    println!(
        "{} {} records to {}",
        "Exported".green().bold(),
        loaded.dataset.len(),
        path.display().to_string().white().bold()
    );

    Ok(())
}
