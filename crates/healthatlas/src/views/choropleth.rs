//! Choropleth series: one indicator value per country code.

use serde::{Deserialize, Serialize};

use crate::dataset::{CanonicalDataset, CellValue};
use crate::selection::Indicator;

use super::scatter::REGION_COLUMN;
use super::{Degradation, ViewResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethPoint {
    pub iso_a3: String,
    /// `None` renders as an uncolored country.
    pub value: Option<f64>,
    pub country: String,
    /// Present only when the dataset has a `region` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethSeries {
    pub indicator: Indicator,
    pub title: String,
    pub points: Vec<ChoroplethPoint>,
}

/// One point per canonical record, keyed by its alpha-3 code.
///
/// Built only from the canonical dataset, so every code has an African
/// geometry.
pub fn build_choropleth(
    dataset: &CanonicalDataset,
    indicator: Indicator,
) -> ViewResult<ChoroplethSeries> {
    ViewResult::from_computation("choropleth", series(dataset, indicator))
}

fn series(
    dataset: &CanonicalDataset,
    indicator: Indicator,
) -> Result<ChoroplethSeries, Degradation> {
    let column = indicator.column();
    let col = dataset.schema().position(column).ok_or_else(|| {
        Degradation::missing_column(format!(
            "Error rendering map: column `{}` not found in data.",
            column
        ))
    })?;
    let region_col = dataset.schema().position(REGION_COLUMN);

    let mut points = Vec::with_capacity(dataset.len());
    for row in 0..dataset.len() {
        let value = match dataset.cell(row, col) {
            CellValue::Missing => None,
            CellValue::Number(v) => Some(v),
            CellValue::Malformed(raw) => {
                return Err(Degradation::computation_fault(format!(
                    "Error rendering map: value `{}` for {} is not a number.",
                    raw,
                    dataset.country(row)
                )));
            }
        };

        points.push(ChoroplethPoint {
            iso_a3: dataset.iso_a3(row).to_string(),
            value,
            country: dataset.country(row).to_string(),
            region: region_col.and_then(|c| dataset.text(row, c)).map(str::to_string),
        });
    }

    Ok(ChoroplethSeries {
        indicator,
        title: indicator.label(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::DegradationKind;
    use crate::views::test_support::dataset;

    #[test]
    fn test_one_point_per_record() {
        let ds = dataset(
            "country,malaria_prevalence\nKenya,10\nAtlantis,99\nDemocratic Republic of the Congo,30\n",
        );
        let series = build_choropleth(&ds, Indicator::MalariaPrevalence);
        let series = series.ok().unwrap();

        let codes: Vec<&str> = series.points.iter().map(|p| p.iso_a3.as_str()).collect();
        assert_eq!(codes, vec!["KEN", "COD"]);
        assert_eq!(series.points[1].value, Some(30.0));
        assert!(series.points.iter().all(|p| p.region.is_none()));
        assert_eq!(series.title, "Malaria Prevalence");
    }

    #[test]
    fn test_region_included_when_present() {
        let ds = dataset("country,region,access_to_sanitation\nKenya,East,40\nGhana,West,60\n");
        let series = build_choropleth(&ds, Indicator::AccessToSanitation);
        let points = &series.ok().unwrap().points;
        assert_eq!(points[0].region.as_deref(), Some("East"));
        assert_eq!(points[1].region.as_deref(), Some("West"));
    }

    #[test]
    fn test_blank_region_is_absent() {
        let ds = dataset("country,region,access_to_sanitation\nKenya,NA,40\nGhana,West,60\n");
        let series = build_choropleth(&ds, Indicator::AccessToSanitation);
        let points = &series.ok().unwrap().points;
        assert_eq!(points[0].region, None);
        assert_eq!(points[1].region.as_deref(), Some("West"));
    }

    #[test]
    fn test_missing_indicator_degrades() {
        let ds = dataset("country,region\nKenya,East\n");
        let result = build_choropleth(&ds, Indicator::VaccinationRate);
        let degradation = result.degradation().unwrap();
        assert_eq!(degradation.kind, DegradationKind::MissingColumn);
        assert!(degradation.reason.starts_with("Error rendering map"));
    }

    #[test]
    fn test_malformed_value_degrades() {
        let ds = dataset("country,vaccination_rate\nKenya,80\nGhana,n.d.\n");
        let result = build_choropleth(&ds, Indicator::VaccinationRate);
        assert_eq!(result.degradation().unwrap().kind, DegradationKind::ComputationFault);
    }
}
