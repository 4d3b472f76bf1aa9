//! CSV export of the canonical dataset and the on-disk cache.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::dataset::CanonicalDataset;
use crate::error::{AtlasError, Result};

/// File name offered for the download affordance.
pub const EXPORT_FILE_NAME: &str = "health_data.csv";

/// File name of the canonical cache written by the cleaning step.
pub const CACHE_FILE_NAME: &str = "cleaned_africa_health_data.csv";

/// Serialize every column and row of the dataset as comma-separated text.
///
/// An empty dataset yields just the header row.
pub fn export_csv(dataset: &CanonicalDataset) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .from_writer(Vec::new());

    writer.write_record(dataset.headers())?;
    for row in dataset.rows() {
        writer.write_record(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| AtlasError::Persistence(format!("Failed to flush CSV export: {}", e)))
}

/// Write the exported CSV to a file, creating parent directories.
pub fn write_csv(dataset: &CanonicalDataset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                AtlasError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let bytes = export_csv(dataset)?;
    fs::write(path, &bytes).map_err(|e| AtlasError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), rows = dataset.len(), bytes = bytes.len(), "wrote dataset");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoResolver;
    use crate::input::DataTable;
    use crate::views::test_support::dataset;

    #[test]
    fn test_export_all_columns_and_rows() {
        let ds = dataset("Country,Vaccination Rate\nkenya,80\nGhana,\n");
        let text = String::from_utf8(export_csv(&ds).unwrap()).unwrap();
        assert_eq!(
            text,
            "country,vaccination_rate,iso_a3\nKenya,80,KEN\nGhana,80,GHA\n"
        );
    }

    #[test]
    fn test_empty_dataset_is_header_only() {
        let table = DataTable::new(
            vec!["country".into(), "x".into()],
            vec![vec!["Atlantis".into(), "1".into()]],
            b',',
        );
        let (ds, _) = GeoResolver::new().resolve(table).unwrap();
        assert!(ds.is_empty());

        let text = String::from_utf8(export_csv(&ds).unwrap()).unwrap();
        assert_eq!(text, "country,x,iso_a3\n");
    }

    #[test]
    fn test_quoting_survives() {
        let ds = dataset("country,note\nKenya,\"rural, remote\"\n");
        let text = String::from_utf8(export_csv(&ds).unwrap()).unwrap();
        assert!(text.contains("\"rural, remote\""));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(EXPORT_FILE_NAME);
        let ds = dataset("country,x\nKenya,1\n");

        write_csv(&ds, &path).unwrap();
        assert!(path.exists());
    }
}
