//! Table-level schema descriptor.

use serde::{Deserialize, Serialize};

use super::column::ColumnSchema;

/// Schema for an entire table.
///
/// Derived once per dataset and queried by every view precondition, so
/// column presence and type are never probed ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Schemas for each column, in table order.
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Create a table schema with the given columns.
    pub fn with_columns(columns: Vec<ColumnSchema>) -> Self {
        Self { columns }
    }

    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Whether a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    /// Position of a named column.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.get_column(name).map(|c| c.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn column(name: &str, position: usize, inferred_type: ColumnType) -> ColumnSchema {
        let mut col = ColumnSchema::new(name, position);
        col.inferred_type = inferred_type;
        col
    }

    #[test]
    fn test_lookup_by_name() {
        let schema = TableSchema::with_columns(vec![
            column("country", 0, ColumnType::String),
            column("vaccination_rate", 1, ColumnType::Float),
        ]);

        assert!(schema.has_column("country"));
        assert!(!schema.has_column("region"));
        assert_eq!(schema.position("vaccination_rate"), Some(1));
        assert_eq!(schema.position("region"), None);
    }
}
