//! The canonical dataset: resolved records plus their schema descriptor.

use serde::{Deserialize, Serialize};

use crate::inference::{StatisticalAnalyzer, parse_numeric};
use crate::input::DataTable;
use crate::schema::TableSchema;

/// Column added by the geographic resolver.
pub const ISO_A3_COLUMN: &str = "iso_a3";

/// Immutable set of canonical records.
///
/// Only [`GeoResolver`](crate::geo::GeoResolver) builds one, so every
/// record's `iso_a3` is guaranteed to be an African alpha-3 code. Share it
/// with `Arc`; nothing mutates it after construction.
///
/// Equality compares columns and records only; the source delimiter is
/// not part of the data.
#[derive(Debug, Clone)]
pub struct CanonicalDataset {
    table: DataTable,
    schema: TableSchema,
    country_idx: usize,
    iso_idx: usize,
}

impl PartialEq for CanonicalDataset {
    fn eq(&self, other: &Self) -> bool {
        self.table.headers == other.table.headers
            && self.table.rows == other.table.rows
            && self.country_idx == other.country_idx
            && self.iso_idx == other.iso_idx
    }
}

/// A numeric cell as seen by the derived views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    /// The cell is missing.
    Missing,
    /// The cell parsed as a finite number.
    Number(f64),
    /// The cell holds text that is not a number.
    Malformed(&'a str),
}

/// Read-only preview of the dataset for a data-table widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPreview {
    /// Column headers.
    pub headers: Vec<String>,
    /// Data rows (first N rows).
    pub rows: Vec<Vec<String>>,
    /// Total row count in the dataset.
    pub total_rows: usize,
    /// Whether the rows were truncated.
    pub truncated: bool,
}

impl CanonicalDataset {
    pub(crate) fn from_resolved(table: DataTable, country_idx: usize, iso_idx: usize) -> Self {
        let schema = StatisticalAnalyzer::new().analyze_table(&table);
        Self {
            table,
            schema,
            country_idx,
            iso_idx,
        }
    }

    /// Column headers in table order.
    pub fn headers(&self) -> &[String] {
        &self.table.headers
    }

    /// All records, row-major.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.table.rows
    }

    /// Schema descriptor derived when the dataset was built.
    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.table.row_count()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    /// Country name of a record.
    pub fn country(&self, row: usize) -> &str {
        self.table.get(row, self.country_idx).unwrap_or("")
    }

    /// Alpha-3 code of a record.
    pub fn iso_a3(&self, row: usize) -> &str {
        self.table.get(row, self.iso_idx).unwrap_or("")
    }

    /// Raw text of a cell, or `None` when the cell is missing.
    pub fn text(&self, row: usize, col: usize) -> Option<&str> {
        self.table
            .get(row, col)
            .filter(|v| !DataTable::is_null_value(v))
    }

    /// Numeric interpretation of a cell.
    pub fn cell(&self, row: usize, col: usize) -> CellValue<'_> {
        match self.table.get(row, col) {
            None => CellValue::Missing,
            Some(v) if DataTable::is_null_value(v) => CellValue::Missing,
            Some(v) => match parse_numeric(v) {
                Some(n) => CellValue::Number(n),
                None => CellValue::Malformed(v),
            },
        }
    }

    /// First `limit` rows for display.
    pub fn preview(&self, limit: usize) -> DataPreview {
        DataPreview {
            headers: self.table.headers.clone(),
            rows: self.table.rows.iter().take(limit).cloned().collect(),
            total_rows: self.len(),
            truncated: self.len() > limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoResolver;
    use crate::schema::ColumnType;

    fn dataset() -> CanonicalDataset {
        let table = DataTable::new(
            vec!["country".into(), "rate".into(), "region".into()],
            vec![
                vec!["Kenya".into(), "80".into(), "East".into()],
                vec!["Ghana".into(), "".into(), "West".into()],
                vec!["Mali".into(), "high".into(), "West".into()],
            ],
            b',',
        );
        GeoResolver::new().resolve(table).unwrap().0
    }

    #[test]
    fn test_schema_descriptor() {
        let ds = dataset();
        assert_eq!(ds.schema().position("iso_a3"), Some(3));
        assert_eq!(ds.schema().columns.len(), 4);
        assert_eq!(ds.schema().get_column("rate").unwrap().inferred_type, ColumnType::String);
    }

    #[test]
    fn test_text_treats_missing_as_none() {
        let ds = dataset();
        assert_eq!(ds.text(1, 2), Some("West"));
        assert_eq!(ds.text(1, 1), None);
        assert_eq!(ds.text(9, 0), None);
    }

    #[test]
    fn test_cell_values() {
        let ds = dataset();
        assert_eq!(ds.cell(0, 1), CellValue::Number(80.0));
        assert_eq!(ds.cell(1, 1), CellValue::Missing);
        assert_eq!(ds.cell(2, 1), CellValue::Malformed("high"));
        assert_eq!(ds.cell(9, 1), CellValue::Missing);
    }

    #[test]
    fn test_equality_ignores_delimiter() {
        let tsv = DataTable::new(
            vec!["country".into(), "x".into()],
            vec![vec!["Kenya".into(), "1".into()]],
            b'\t',
        );
        let mut csv = tsv.clone();
        csv.delimiter = b',';

        let a = GeoResolver::new().resolve(tsv).unwrap().0;
        let b = GeoResolver::new().resolve(csv).unwrap().0;
        assert_eq!(a, b);
    }

    #[test]
    fn test_preview_truncates() {
        let ds = dataset();
        let preview = ds.preview(2);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.total_rows, 3);
        assert!(preview.truncated);
        assert!(!ds.preview(10).truncated);
    }
}
