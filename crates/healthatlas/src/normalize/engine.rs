//! Normalization engine: raw table in, clean table out.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::dataset::ISO_A3_COLUMN;
use crate::error::{AtlasError, Result};
use crate::inference::StatisticalAnalyzer;
use crate::input::DataTable;

use super::report::{Imputation, NormalizeReport, RenamedColumn};
use super::text::{canonical_column_name, format_number, title_case};

/// Default name of the column holding country names.
pub const COUNTRY_COLUMN: &str = "country";

/// Canonicalizes column names and country text, imputes numeric gaps with
/// the column median and removes exact duplicate rows.
#[derive(Debug, Clone)]
pub struct Normalizer {
    country_column: String,
    analyzer: StatisticalAnalyzer,
}

impl Normalizer {
    /// Create a normalizer that reads countries from `country`.
    pub fn new() -> Self {
        Self::with_country_column(COUNTRY_COLUMN)
    }

    /// Create a normalizer with a custom (already canonical) country column.
    pub fn with_country_column(column: impl Into<String>) -> Self {
        Self {
            country_column: canonical_column_name(&column.into()),
            analyzer: StatisticalAnalyzer::new(),
        }
    }

    /// Name of the country column this normalizer expects.
    pub fn country_column(&self) -> &str {
        &self.country_column
    }

    /// Normalize a raw table.
    ///
    /// Fails with [`AtlasError::DataUnavailable`] when the table has no rows
    /// or no country column.
    pub fn normalize(&self, mut table: DataTable) -> Result<(DataTable, NormalizeReport)> {
        if table.row_count() == 0 {
            return Err(AtlasError::DataUnavailable(
                "No data rows to normalize".to_string(),
            ));
        }

        let mut report = NormalizeReport {
            rows_in: table.row_count(),
            ..Default::default()
        };

        self.canonicalize_headers(&mut table, &mut report);

        let country_idx = table.column_index(&self.country_column).ok_or_else(|| {
            AtlasError::DataUnavailable(format!(
                "No '{}' column found (columns: {})",
                self.country_column,
                table.headers.join(", ")
            ))
        })?;

        self.retitle_countries(&mut table, country_idx, &mut report);
        clear_derived_codes(&mut table, country_idx);
        self.impute_medians(&mut table, &mut report);
        report.duplicates_removed = drop_duplicates(&mut table);
        report.rows_out = table.row_count();

        info!(
            rows_in = report.rows_in,
            rows_out = report.rows_out,
            duplicates_removed = report.duplicates_removed,
            values_imputed = report.values_imputed(),
            "normalized dataset"
        );

        Ok((table, report))
    }

    fn canonicalize_headers(&self, table: &mut DataTable, report: &mut NormalizeReport) {
        for header in &mut table.headers {
            let canonical = canonical_column_name(header);
            if canonical != *header {
                report.renamed_columns.push(RenamedColumn {
                    from: std::mem::replace(header, canonical.clone()),
                    to: canonical,
                });
            }
        }
    }

    fn retitle_countries(
        &self,
        table: &mut DataTable,
        country_idx: usize,
        report: &mut NormalizeReport,
    ) {
        for row in &mut table.rows {
            if let Some(cell) = row.get_mut(country_idx) {
                let titled = title_case(cell);
                if titled != *cell {
                    *cell = titled;
                    report.countries_retitled += 1;
                }
            }
        }
    }

    /// Fill missing cells of every numeric column with its pre-imputation
    /// median. Columns are independent.
    fn impute_medians(&self, table: &mut DataTable, report: &mut NormalizeReport) {
        for col in 0..table.column_count() {
            let analysis = self.analyzer.analyze_column(table, col);
            if analysis.null_count == 0 {
                continue;
            }
            let Some(stats) = analysis.numeric else {
                continue;
            };

            let fill = format_number(stats.median);
            let mut values_filled = 0;
            for row in &mut table.rows {
                if let Some(cell) = row.get_mut(col) {
                    if DataTable::is_null_value(cell) {
                        *cell = fill.clone();
                        values_filled += 1;
                    }
                }
            }

            debug!(
                column = %table.headers[col],
                median = stats.median,
                values_filled,
                "imputed missing values"
            );

            report.imputations.push(Imputation {
                column: table.headers[col].clone(),
                median: stats.median,
                values_filled,
            });
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank an incoming `iso_a3` column. Codes are re-derived from the country
/// name on resolve, so stale codes must not keep duplicate rows apart.
fn clear_derived_codes(table: &mut DataTable, country_idx: usize) {
    let Some(iso_idx) = table.column_index(ISO_A3_COLUMN) else {
        return;
    };
    if iso_idx == country_idx {
        return;
    }
    for row in &mut table.rows {
        if let Some(cell) = row.get_mut(iso_idx) {
            cell.clear();
        }
    }
    debug!("cleared incoming iso_a3 codes");
}

/// Remove rows identical to an earlier row, keeping first occurrences.
/// Returns the number removed.
fn drop_duplicates(table: &mut DataTable) -> usize {
    let before = table.rows.len();
    let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);
    table.rows.retain(|row| seen.insert(row.clone()));
    before - table.rows.len()
}
