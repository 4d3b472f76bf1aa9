//! Correlation series: healthcare facilities against the active indicator.

use serde::{Deserialize, Serialize};

use crate::dataset::{CanonicalDataset, CellValue};
use crate::selection::Indicator;

use super::{Degradation, ViewResult};

/// Column plotted on the x axis.
pub const HEALTHCARE_FACILITIES_COLUMN: &str = "healthcare_facilities";

/// Optional grouping column.
pub const REGION_COLUMN: &str = "region";

/// Reason reported when the x-axis column is absent.
pub const MISSING_FACILITIES_REASON: &str = "missing healthcare_facilities column";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub country: String,
    pub healthcare_facilities: f64,
    pub value: f64,
    /// Grouping/color key, when the dataset has a `region` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Marker size hint from `vaccination_rate`, when that column exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_hint: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub indicator: Indicator,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
}

/// Pair each record's facility count with its indicator value.
///
/// Degrades with [`MISSING_FACILITIES_REASON`] whenever the dataset lacks
/// `healthcare_facilities`, whatever the indicator.
pub fn build_scatter(dataset: &CanonicalDataset, indicator: Indicator) -> ViewResult<ScatterSeries> {
    ViewResult::from_computation("scatter", series(dataset, indicator))
}

fn series(dataset: &CanonicalDataset, indicator: Indicator) -> Result<ScatterSeries, Degradation> {
    let schema = dataset.schema();
    let x_col = schema
        .position(HEALTHCARE_FACILITIES_COLUMN)
        .ok_or_else(|| Degradation::missing_column(MISSING_FACILITIES_REASON))?;

    let column = indicator.column();
    let y_col = schema.position(column).ok_or_else(|| {
        Degradation::computation_fault(format!(
            "Error rendering scatter plot: column `{}` not found in data.",
            column
        ))
    })?;
    let region_col = schema.position(REGION_COLUMN);
    let size_col = schema.position(Indicator::VaccinationRate.column());

    let number = |row: usize, col: usize| -> Result<Option<f64>, Degradation> {
        match dataset.cell(row, col) {
            CellValue::Missing => Ok(None),
            CellValue::Number(v) => Ok(Some(v)),
            CellValue::Malformed(raw) => Err(Degradation::computation_fault(format!(
                "Error rendering scatter plot: value `{}` in `{}` for {} is not a number.",
                raw,
                dataset.headers()[col],
                dataset.country(row)
            ))),
        }
    };

    let mut points = Vec::with_capacity(dataset.len());
    for row in 0..dataset.len() {
        let (Some(x), Some(y)) = (number(row, x_col)?, number(row, y_col)?) else {
            continue;
        };
        let size_hint = match size_col {
            Some(c) => number(row, c)?,
            None => None,
        };

        points.push(ScatterPoint {
            country: dataset.country(row).to_string(),
            healthcare_facilities: x,
            value: y,
            region: region_col.and_then(|c| dataset.text(row, c)).map(str::to_string),
            size_hint,
        });
    }

    let label = indicator.label();
    Ok(ScatterSeries {
        indicator,
        title: format!("Healthcare Facilities vs {}", label),
        x_label: "Healthcare Facilities".to_string(),
        y_label: label,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::DegradationKind;
    use crate::views::test_support::dataset;

    #[test]
    fn test_missing_facilities_degrades_for_every_indicator() {
        let ds = dataset("country,vaccination_rate,access_to_water\nKenya,80,50\n");
        for indicator in Indicator::ALL {
            let result = build_scatter(&ds, indicator);
            let degradation = result.degradation().unwrap();
            assert_eq!(degradation.kind, DegradationKind::MissingColumn);
            assert_eq!(degradation.reason, MISSING_FACILITIES_REASON);
        }
    }

    #[test]
    fn test_points_with_annotations() {
        let ds = dataset(
            "country,region,healthcare_facilities,vaccination_rate,hiv_prevalence\n\
             Kenya,East,120,80,4.5\n\
             Ghana,West,90,70,1.7\n",
        );
        let series = build_scatter(&ds, Indicator::HivPrevalence);
        let series = series.ok().unwrap();

        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].healthcare_facilities, 120.0);
        assert_eq!(series.points[0].value, 4.5);
        assert_eq!(series.points[0].region.as_deref(), Some("East"));
        assert_eq!(series.points[1].size_hint, Some(70.0));
        assert_eq!(series.title, "Healthcare Facilities vs Hiv Prevalence");
    }

    #[test]
    fn test_annotations_absent_without_columns() {
        let ds = dataset("country,healthcare_facilities,access_to_water\nKenya,120,50\n");
        let series = build_scatter(&ds, Indicator::AccessToWater);
        let point = &series.ok().unwrap().points[0];
        assert!(point.region.is_none());
        assert!(point.size_hint.is_none());
    }

    #[test]
    fn test_blank_region_is_absent() {
        let ds = dataset(
            "country,region,healthcare_facilities,access_to_water\nKenya,,120,50\nGhana,West,90,70\n",
        );
        let series = build_scatter(&ds, Indicator::AccessToWater);
        let points = &series.ok().unwrap().points;
        assert!(points[0].region.is_none());
        assert_eq!(points[1].region.as_deref(), Some("West"));
    }

    #[test]
    fn test_missing_indicator_column_is_fault() {
        let ds = dataset("country,healthcare_facilities\nKenya,120\n");
        let result = build_scatter(&ds, Indicator::MalariaPrevalence);
        assert_eq!(result.degradation().unwrap().kind, DegradationKind::ComputationFault);
    }

    #[test]
    fn test_malformed_facility_count_is_fault() {
        let ds = dataset("country,healthcare_facilities,access_to_water\nKenya,many,50\n");
        let result = build_scatter(&ds, Indicator::AccessToWater);
        assert!(result.degradation().unwrap().reason.contains("many"));
    }
}
