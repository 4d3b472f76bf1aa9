//! Top-N summary: the countries with the highest indicator values.

use serde::{Deserialize, Serialize};

use crate::dataset::{CanonicalDataset, CellValue};
use crate::selection::Indicator;

use super::{Degradation, ViewResult};

/// Number of countries in the summary.
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub country: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSummary {
    pub indicator: Indicator,
    /// e.g. `Top 3 Countries by Vaccination Rate`.
    pub title: String,
    /// At most [`TOP_N`] entries, highest value first.
    pub entries: Vec<RankedEntry>,
}

/// Rank countries by the indicator, highest first, and keep the top three.
///
/// Rows missing the value are skipped. Ties keep dataset order.
pub fn summarize(dataset: &CanonicalDataset, indicator: Indicator) -> ViewResult<TopSummary> {
    ViewResult::from_computation("summary", rank(dataset, indicator))
}

fn rank(dataset: &CanonicalDataset, indicator: Indicator) -> Result<TopSummary, Degradation> {
    let column = indicator.column();
    let col = dataset.schema().position(column).ok_or_else(|| {
        Degradation::missing_column(format!("Indicator `{}` not found in data.", column))
    })?;

    let mut ranked = Vec::with_capacity(dataset.len());
    for row in 0..dataset.len() {
        match dataset.cell(row, col) {
            CellValue::Missing => continue,
            CellValue::Number(value) => ranked.push(RankedEntry {
                country: dataset.country(row).to_string(),
                value,
            }),
            CellValue::Malformed(raw) => {
                return Err(Degradation::computation_fault(format!(
                    "Indicator `{}` has non-numeric value `{}` for {}.",
                    column,
                    raw,
                    dataset.country(row)
                )));
            }
        }
    }

    // Stable sort: equal values stay in dataset order.
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked.truncate(TOP_N);

    Ok(TopSummary {
        indicator,
        title: format!("Top {} Countries by {}", TOP_N, indicator.label()),
        entries: ranked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::DegradationKind;
    use crate::views::test_support::dataset;

    fn pairs(summary: &TopSummary) -> Vec<(&str, f64)> {
        summary
            .entries
            .iter()
            .map(|e| (e.country.as_str(), e.value))
            .collect()
    }

    #[test]
    fn test_sorted_descending() {
        let ds = dataset("country,vaccination_rate\nKenya,10\nGhana,30\nMali,20\n");
        let result = summarize(&ds, Indicator::VaccinationRate);
        let summary = result.ok().unwrap();

        assert_eq!(pairs(summary), vec![("Ghana", 30.0), ("Mali", 20.0), ("Kenya", 10.0)]);
        assert_eq!(summary.title, "Top 3 Countries by Vaccination Rate");
    }

    #[test]
    fn test_at_most_three() {
        let ds = dataset(
            "country,hiv_prevalence\nKenya,1\nGhana,5\nMali,3\nChad,4\nTogo,2\n",
        );
        let summary = summarize(&ds, Indicator::HivPrevalence);
        assert_eq!(
            pairs(summary.ok().unwrap()),
            vec![("Ghana", 5.0), ("Chad", 4.0), ("Mali", 3.0)]
        );
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let ds = dataset("country,access_to_water\nKenya,50\nGhana,70\nMali,50\nChad,50\n");
        let summary = summarize(&ds, Indicator::AccessToWater);
        assert_eq!(
            pairs(summary.ok().unwrap()),
            vec![("Ghana", 70.0), ("Kenya", 50.0), ("Mali", 50.0)]
        );
    }

    #[test]
    fn test_fewer_rows_than_n() {
        let ds = dataset("country,access_to_water\nKenya,50\n");
        let summary = summarize(&ds, Indicator::AccessToWater);
        assert_eq!(summary.ok().unwrap().entries.len(), 1);
    }

    #[test]
    fn test_missing_indicator_degrades() {
        let ds = dataset("country,access_to_water\nKenya,50\n");
        let result = summarize(&ds, Indicator::MalariaPrevalence);
        let degradation = result.degradation().unwrap();
        assert_eq!(degradation.kind, DegradationKind::MissingColumn);
        assert!(degradation.reason.contains("malaria_prevalence"));
    }

    #[test]
    fn test_text_value_degrades() {
        let ds = dataset("country,vaccination_rate\nKenya,50\nGhana,high\n");
        let result = summarize(&ds, Indicator::VaccinationRate);
        assert_eq!(result.degradation().unwrap().kind, DegradationKind::ComputationFault);
    }
}
