//! HealthAtlas: indicator-driven views over African public-health datasets.
//!
//! HealthAtlas ingests a per-country CSV table, normalizes it, resolves every
//! country to an ISO 3166-1 alpha-3 code and keeps only African records.
//! A [`Dashboard`] then derives a top-3 summary, a choropleth series and a
//! facilities scatter series for whichever health indicator is selected.
//!
//! # Core Principles
//!
//! - **Load once**: The canonical dataset is immutable after ingestion
//! - **Degrade, don't fail**: A view that cannot render reports why, and its
//!   siblings are unaffected
//! - **Silent filtering**: Non-African and unknown countries are dropped
//!   before any view sees the data
//!
//! # Example
//!
//! ```no_run
//! use healthatlas::{HealthAtlas, Indicator};
//!
//! let atlas = HealthAtlas::new();
//! let loaded = atlas.load("africa_health_data.csv").unwrap();
//!
//! let mut dashboard = loaded.dashboard(Indicator::default());
//! let frame = dashboard.select(Indicator::AccessToWater);
//! println!("Panels: {}", frame.panels.len());
//! ```

pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geo;
pub mod inference;
pub mod input;
pub mod normalize;
pub mod schema;
pub mod selection;
pub mod views;

mod atlas;

pub use crate::atlas::{AtlasConfig, HealthAtlas, LoadSummary, LoadedDataset};
pub use dashboard::{Dashboard, DashboardFrame, DerivedView, Panel};
pub use dataset::{CanonicalDataset, CellValue, DataPreview, ISO_A3_COLUMN};
pub use error::{AtlasError, Result};
pub use export::{CACHE_FILE_NAME, EXPORT_FILE_NAME, export_csv, write_csv};
pub use geo::{GeoResolver, ResolveReport};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use normalize::{NormalizeReport, Normalizer};
pub use schema::{ColumnSchema, ColumnType, TableSchema};
pub use selection::{Indicator, SelectionState};
pub use views::{Degradation, DegradationKind, ViewResult};
