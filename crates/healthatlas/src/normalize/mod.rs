//! Schema normalization: raw records to clean records.

mod engine;
mod report;
mod text;

pub use engine::{COUNTRY_COLUMN, Normalizer};
pub use report::{Imputation, NormalizeReport, RenamedColumn};
pub use text::{canonical_column_name, format_number, title_case};
