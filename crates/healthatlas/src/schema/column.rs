//! Column schema definition and statistics.

use serde::{Deserialize, Serialize};

use super::types::ColumnType;

/// Statistics for numeric columns, computed over non-missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Exact median; the mean of the two middle values for even counts.
    pub median: f64,
}

/// Schema for a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Inferred data type.
    pub inferred_type: ColumnType,
    /// Total number of values (including missing).
    pub count: usize,
    /// Number of missing values.
    pub null_count: usize,
    /// Numeric statistics (numeric columns only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericStatistics>,
}

impl ColumnSchema {
    /// Create a new column schema with basic information.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
            inferred_type: ColumnType::Unknown,
            count: 0,
            null_count: 0,
            numeric: None,
        }
    }
}
