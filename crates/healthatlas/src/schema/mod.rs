//! Schema types for representing inferred table structure.

mod column;
mod table;
mod types;

pub use column::{ColumnSchema, NumericStatistics};
pub use table::TableSchema;
pub use types::ColumnType;
