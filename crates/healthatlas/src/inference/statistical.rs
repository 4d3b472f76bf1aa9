//! Statistical analysis for column type inference.

use crate::input::DataTable;
use crate::schema::{ColumnSchema, ColumnType, NumericStatistics, TableSchema};

/// Parse a cell as a finite number, ignoring surrounding whitespace.
pub fn parse_numeric(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Exact median of a set of values. Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Results from statistical analysis of a column.
#[derive(Debug, Clone)]
pub struct StatisticalAnalysis {
    /// Inferred data type.
    pub inferred_type: ColumnType,
    /// Total number of values.
    pub count: usize,
    /// Number of missing values.
    pub null_count: usize,
    /// Numeric statistics, when the column is numeric.
    pub numeric: Option<NumericStatistics>,
}

/// Performs statistical analysis on data columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Create a new statistical analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a column and return statistical analysis.
    ///
    /// A column is numeric when it has at least one non-missing value and
    /// every non-missing value parses as a finite number.
    pub fn analyze_column(&self, table: &DataTable, col_index: usize) -> StatisticalAnalysis {
        let mut count = 0;
        let mut null_count = 0;
        let mut numbers = Vec::new();
        let mut all_numeric = true;
        let mut all_integer = true;

        for value in table.column_values(col_index) {
            count += 1;
            if DataTable::is_null_value(value) {
                null_count += 1;
                continue;
            }
            if !all_numeric {
                continue;
            }
            match parse_numeric(value) {
                Some(n) => {
                    if all_integer && value.trim().parse::<i64>().is_err() {
                        all_integer = false;
                    }
                    numbers.push(n);
                }
                None => all_numeric = false,
            }
        }

        let inferred_type = if numbers.is_empty() && all_numeric {
            ColumnType::Unknown
        } else if !all_numeric {
            ColumnType::String
        } else if all_integer {
            ColumnType::Integer
        } else {
            ColumnType::Float
        };

        let numeric = if inferred_type.is_numeric() {
            numeric_statistics(&numbers)
        } else {
            None
        };

        StatisticalAnalysis {
            inferred_type,
            count,
            null_count,
            numeric,
        }
    }

    /// Derive a schema descriptor for every column of a table.
    pub fn analyze_table(&self, table: &DataTable) -> TableSchema {
        let columns = table
            .headers
            .iter()
            .enumerate()
            .map(|(position, name)| {
                let analysis = self.analyze_column(table, position);
                let mut column = ColumnSchema::new(name.clone(), position);
                column.inferred_type = analysis.inferred_type;
                column.count = analysis.count;
                column.null_count = analysis.null_count;
                column.numeric = analysis.numeric;
                column
            })
            .collect();

        TableSchema::with_columns(columns)
    }
}

fn numeric_statistics(values: &[f64]) -> Option<NumericStatistics> {
    let median = median(values)?;
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    Some(NumericStatistics {
        min,
        max,
        mean,
        median,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(values: &[&str]) -> DataTable {
        DataTable::new(
            vec!["x".to_string()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
            b',',
        )
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_integer_column() {
        let analysis = StatisticalAnalyzer::new().analyze_column(&table(&["1", "2", "", "10"]), 0);
        assert_eq!(analysis.inferred_type, ColumnType::Integer);
        assert_eq!(analysis.null_count, 1);
        assert_eq!(analysis.numeric.unwrap().median, 2.0);
    }

    #[test]
    fn test_float_column() {
        let analysis = StatisticalAnalyzer::new().analyze_column(&table(&["1.5", "2", "NA"]), 0);
        assert_eq!(analysis.inferred_type, ColumnType::Float);
        let stats = analysis.numeric.unwrap();
        assert_eq!(stats.min, 1.5);
        assert_eq!(stats.max, 2.0);
    }

    #[test]
    fn test_mixed_column_is_string() {
        let analysis = StatisticalAnalyzer::new().analyze_column(&table(&["1", "East", "3"]), 0);
        assert_eq!(analysis.inferred_type, ColumnType::String);
        assert!(analysis.numeric.is_none());
    }

    #[test]
    fn test_all_missing_is_unknown() {
        let analysis = StatisticalAnalyzer::new().analyze_column(&table(&["", "NA"]), 0);
        assert_eq!(analysis.inferred_type, ColumnType::Unknown);
        assert_eq!(analysis.null_count, 2);
    }

    #[test]
    fn test_non_finite_is_not_numeric() {
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric(" 4.25 "), Some(4.25));
    }
}
