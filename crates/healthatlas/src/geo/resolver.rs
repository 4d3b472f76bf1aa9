//! Geographic code resolution: clean records to canonical records.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dataset::{CanonicalDataset, ISO_A3_COLUMN};
use crate::error::{AtlasError, Result};
use crate::input::DataTable;
use crate::normalize::COUNTRY_COLUMN;

use super::countries::{country_table, is_allowed};

/// Counts of records kept and excluded by the resolver.
///
/// Exclusion is silent as far as the views are concerned; these figures
/// exist for logging and the CLI status output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolveReport {
    /// Rows handed to the resolver.
    pub rows_in: usize,
    /// Rows kept in the canonical dataset.
    pub rows_out: usize,
    /// Rows whose country had no mapping entry.
    pub unresolved_rows: usize,
    /// Distinct unresolved country names, in first-seen order.
    #[serde(default, skip_serializing_if = "IndexSet::is_empty")]
    pub unresolved_countries: IndexSet<String>,
    /// Rows whose mapped code was outside the allow-list.
    pub disallowed_rows: usize,
}

impl ResolveReport {
    /// Total rows excluded from the canonical dataset.
    pub fn excluded(&self) -> usize {
        self.unresolved_rows + self.disallowed_rows
    }
}

/// Maps country names to alpha-3 codes and keeps only African codes.
#[derive(Debug, Clone)]
pub struct GeoResolver {
    mapping: IndexMap<String, String>,
    country_column: String,
}

impl GeoResolver {
    /// Resolver backed by the built-in 54-country table.
    pub fn new() -> Self {
        let mapping = country_table()
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect();
        Self::with_mapping(mapping)
    }

    /// Resolver backed by a custom mapping. Codes outside the African
    /// allow-list are still filtered out.
    pub fn with_mapping(mapping: IndexMap<String, String>) -> Self {
        Self {
            mapping,
            country_column: COUNTRY_COLUMN.to_string(),
        }
    }

    /// Read country names from a different (canonical) column.
    pub fn with_country_column(mut self, column: impl Into<String>) -> Self {
        self.country_column = column.into();
        self
    }

    /// Resolve a clean table into the canonical dataset.
    ///
    /// Row order is preserved. An existing `iso_a3` column is overwritten in
    /// place; otherwise one is appended.
    pub fn resolve(&self, table: DataTable) -> Result<(CanonicalDataset, ResolveReport)> {
        let country_idx = table.column_index(&self.country_column).ok_or_else(|| {
            AtlasError::DataUnavailable(format!("No '{}' column found", self.country_column))
        })?;

        let DataTable {
            mut headers,
            rows,
            delimiter,
        } = table;

        let iso_idx = match headers.iter().position(|h| h == ISO_A3_COLUMN) {
            Some(idx) => idx,
            None => {
                headers.push(ISO_A3_COLUMN.to_string());
                headers.len() - 1
            }
        };

        let mut report = ResolveReport {
            rows_in: rows.len(),
            ..Default::default()
        };

        let mut kept = Vec::with_capacity(rows.len());
        for mut row in rows {
            let country = row.get(country_idx).map(String::as_str).unwrap_or("");

            let Some(code) = self.mapping.get(country) else {
                report.unresolved_rows += 1;
                if !report.unresolved_countries.contains(country) {
                    report.unresolved_countries.insert(country.to_string());
                }
                continue;
            };

            if !is_allowed(code) {
                debug!(country, code = %code, "code outside allow-list");
                report.disallowed_rows += 1;
                continue;
            }

            let code = code.clone();
            row.resize(headers.len(), String::new());
            row[iso_idx] = code;
            kept.push(row);
        }

        report.rows_out = kept.len();

        info!(
            rows_in = report.rows_in,
            rows_out = report.rows_out,
            excluded = report.excluded(),
            "resolved country codes"
        );
        if !report.unresolved_countries.is_empty() {
            debug!(countries = ?report.unresolved_countries, "unresolved countries dropped");
        }

        let dataset = CanonicalDataset::from_resolved(
            DataTable::new(headers, kept, delimiter),
            country_idx,
            iso_idx,
        );
        Ok((dataset, report))
    }
}

impl Default for GeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(rows: &[&[&str]]) -> DataTable {
        DataTable::new(
            vec!["country".to_string(), "x".to_string()],
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_resolves_and_drops() {
        let table = clean(&[
            &["Democratic Republic Of The Congo", "1"],
            &["Atlantis", "2"],
            &["Kenya", "3"],
            &["France", "4"],
        ]);
        let (dataset, report) = GeoResolver::new().resolve(table).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.iso_a3(0), "COD");
        assert_eq!(dataset.country(1), "Kenya");
        assert_eq!(dataset.headers().last().map(String::as_str), Some("iso_a3"));
        assert_eq!(report.unresolved_rows, 2);
        assert_eq!(report.excluded(), 2);
        assert!(report.unresolved_countries.contains("Atlantis"));
    }

    #[test]
    fn test_allow_list_filters_richer_mapping() {
        let mut mapping = IndexMap::new();
        mapping.insert("Kenya".to_string(), "KEN".to_string());
        mapping.insert("France".to_string(), "FRA".to_string());
        mapping.insert("Western Sahara".to_string(), "ESH".to_string());

        let table = clean(&[&["France", "1"], &["Kenya", "2"], &["Western Sahara", "3"]]);
        let (dataset, report) = GeoResolver::with_mapping(mapping).resolve(table).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.iso_a3(0), "KEN");
        assert_eq!(report.disallowed_rows, 2);
        assert_eq!(report.unresolved_rows, 0);
    }

    #[test]
    fn test_existing_iso_column_is_overwritten() {
        let table = DataTable::new(
            vec!["country".into(), "iso_a3".into(), "x".into()],
            vec![vec!["Ghana".into(), "XXX".into(), "1".into()]],
            b',',
        );
        let (dataset, _) = GeoResolver::new().resolve(table).unwrap();
        assert_eq!(dataset.headers(), &["country", "iso_a3", "x"]);
        assert_eq!(dataset.iso_a3(0), "GHA");
    }

    #[test]
    fn test_order_is_preserved() {
        let table = clean(&[&["Togo", "1"], &["Atlantis", "2"], &["Benin", "3"], &["Chad", "4"]]);
        let (dataset, _) = GeoResolver::new().resolve(table).unwrap();
        let countries: Vec<&str> = (0..dataset.len()).map(|i| dataset.country(i)).collect();
        assert_eq!(countries, vec!["Togo", "Benin", "Chad"]);
    }
}
