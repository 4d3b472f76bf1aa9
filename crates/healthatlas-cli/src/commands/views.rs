//! Views command - render every view for one indicator.

use healthatlas::Indicator;

use crate::cli::IngestArgs;
use crate::render;

pub fn run(
    ingest: IngestArgs,
    indicator: Indicator,
    rows: usize,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = super::load(&ingest)?;
    let dashboard = loaded.dashboard(indicator);

    if json_output {
        let output = serde_json::json!({
            "frame": dashboard.frame(),
            "data": dashboard.preview(rows),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render::frame(dashboard.frame()));
    if rows > 0 {
        println!();
        print!("{}", render::preview(&dashboard.preview(rows)));
    }

    Ok(())
}
