//! Main HealthAtlas struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info_span;

use crate::dashboard::Dashboard;
use crate::dataset::CanonicalDataset;
use crate::error::{AtlasError, Result};
use crate::export::{CACHE_FILE_NAME, EXPORT_FILE_NAME, write_csv};
use crate::geo::{GeoResolver, ResolveReport};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::normalize::{COUNTRY_COLUMN, NormalizeReport, Normalizer};
use crate::selection::Indicator;

/// Configuration for ingestion.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Column holding country names (canonicalized before use).
    pub country_column: String,
    /// File name of the canonical cache.
    pub cache_file_name: String,
    /// File name offered for downloads.
    pub export_file_name: String,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            country_column: COUNTRY_COLUMN.to_string(),
            cache_file_name: CACHE_FILE_NAME.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
        }
    }
}

impl AtlasConfig {
    /// Force a delimiter instead of auto-detecting it.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.parser.delimiter = Some(delimiter);
        self
    }

    /// Read at most `rows` data rows.
    pub fn with_max_rows(mut self, rows: usize) -> Self {
        self.parser.max_rows = Some(rows);
        self
    }

    /// Read country names from a different column.
    pub fn with_country_column(mut self, column: impl Into<String>) -> Self {
        self.country_column = column.into();
        self
    }

    /// Check the configuration before building a pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.country_column.trim().is_empty() {
            return Err(AtlasError::Config(
                "country column name cannot be empty".to_string(),
            ));
        }
        if self.parser.max_rows == Some(0) {
            return Err(AtlasError::Config(
                "max rows must be at least 1".to_string(),
            ));
        }
        for name in [&self.cache_file_name, &self.export_file_name] {
            if name.trim().is_empty() {
                return Err(AtlasError::Config("file names cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Result of ingesting a dataset.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// Metadata about the source input.
    pub source: SourceMetadata,
    /// The canonical dataset, shared read-only.
    pub dataset: Arc<CanonicalDataset>,
    /// What normalization changed.
    pub normalize: NormalizeReport,
    /// What resolution kept and excluded.
    pub resolve: ResolveReport,
}

/// Serializable summary of an ingestion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadSummary {
    pub source: SourceMetadata,
    pub normalize: NormalizeReport,
    pub resolve: ResolveReport,
    pub rows: usize,
    pub columns: Vec<String>,
    /// Indicators that exist as columns in this dataset.
    pub available_indicators: Vec<Indicator>,
}

impl LoadSummary {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl LoadedDataset {
    /// Build a dashboard over this dataset.
    pub fn dashboard(&self, initial: Indicator) -> Dashboard {
        Dashboard::new(Arc::clone(&self.dataset), initial)
    }

    /// Indicators present as columns.
    pub fn available_indicators(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|i| self.dataset.schema().has_column(i.column()))
            .collect()
    }

    /// Summary for display or JSON output.
    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            source: self.source.clone(),
            normalize: self.normalize.clone(),
            resolve: self.resolve.clone(),
            rows: self.dataset.len(),
            columns: self.dataset.headers().to_vec(),
            available_indicators: self.available_indicators(),
        }
    }
}

/// Ingestion pipeline: parse, normalize, resolve.
pub struct HealthAtlas {
    config: AtlasConfig,
    parser: Parser,
    normalizer: Normalizer,
    resolver: GeoResolver,
}

impl HealthAtlas {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(AtlasConfig::default())
    }

    /// Create a pipeline with custom configuration.
    pub fn with_config(config: AtlasConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let normalizer = Normalizer::with_country_column(config.country_column.clone());
        let resolver =
            GeoResolver::new().with_country_column(normalizer.country_column().to_string());

        Self {
            config,
            parser,
            normalizer,
            resolver,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Ingest a file.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<LoadedDataset> {
        let path = path.as_ref();
        let _span = info_span!("load", path = %path.display()).entered();

        let (table, source) = self.parser.parse_file(path)?;
        self.build(table, source)
    }

    /// Ingest bytes that arrived from elsewhere (e.g. a remote fetch).
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<LoadedDataset> {
        let _span = info_span!("load_bytes", size = bytes.len()).entered();

        let (table, source) = self.parser.parse_bytes(bytes)?;
        self.build(table, source)
    }

    /// Ingest and write the canonical cache file.
    ///
    /// Without an explicit output the cache lands next to the input.
    pub fn clean_to_cache(
        &self,
        input: impl AsRef<Path>,
        output: Option<&Path>,
    ) -> Result<(LoadedDataset, std::path::PathBuf)> {
        let input = input.as_ref();
        let loaded = self.load(input)?;

        let output = match output {
            Some(p) => p.to_path_buf(),
            None => input.with_file_name(&self.config.cache_file_name),
        };
        write_csv(&loaded.dataset, &output)?;

        Ok((loaded, output))
    }

    fn build(&self, table: DataTable, source: SourceMetadata) -> Result<LoadedDataset> {
        let (clean, normalize) = self.normalizer.normalize(table)?;
        let (dataset, resolve) = self.resolver.resolve(clean)?;

        Ok(LoadedDataset {
            source,
            dataset: Arc::new(dataset),
            normalize,
            resolve,
        })
    }
}

impl Default for HealthAtlas {
    fn default() -> Self {
        Self::new()
    }
}
