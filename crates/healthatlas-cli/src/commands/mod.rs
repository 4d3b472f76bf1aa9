//! CLI command implementations.

pub mod clean;
pub mod explore;
pub mod export;
pub mod status;
pub mod views;

use healthatlas::{HealthAtlas, LoadedDataset};
use tracing::debug;

use crate::cli::IngestArgs;

/// Run the ingestion pipeline for a command.
pub(crate) fn load(ingest: &IngestArgs) -> Result<LoadedDataset, Box<dyn std::error::Error>> {
    if !ingest.file.exists() {
        return Err(format!("File not found: {}", ingest.file.display()).into());
    }

    let atlas = HealthAtlas::with_config(ingest.config()?);
    let loaded = atlas.load(&ingest.file)?;
    debug!(
        rows = loaded.dataset.len(),
        excluded = loaded.resolve.excluded(),
        "dataset ready"
    );
    Ok(loaded)
}
