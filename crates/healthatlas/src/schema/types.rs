//! Core type definitions for schema representation.

use serde::{Deserialize, Serialize};

/// Inferred data type for a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    String,
    /// Every value is missing, so no type can be inferred.
    #[default]
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::String => write!(f, "string"),
            ColumnType::Unknown => write!(f, "unknown"),
        }
    }
}
