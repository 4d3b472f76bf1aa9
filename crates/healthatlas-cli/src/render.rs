//! Plain-text rendering of dashboard panels.
//!
//! Render functions build strings so commands can print them and tests can
//! inspect them.

use colored::Colorize;
use healthatlas::views::{ChoroplethSeries, ScatterSeries, TopSummary};
use healthatlas::{DashboardFrame, DataPreview, Degradation, Panel, ViewResult};

/// Render every panel of a frame, separated by blank lines.
pub fn frame(frame: &DashboardFrame) -> String {
    let mut out = format!(
        "{} {} (revision {})\n",
        "Indicator:".cyan().bold(),
        frame.indicator.label().white().bold(),
        frame.revision
    );

    for panel in &frame.panels {
        out.push('\n');
        out.push_str(&self::panel(panel));
    }
    out
}

pub fn panel(panel: &Panel) -> String {
    match panel {
        Panel::Summary { result } => render_result("Summary", result, summary),
        Panel::Choropleth { result } => render_result("Map", result, choropleth),
        Panel::Scatter { result } => render_result("Scatter", result, scatter),
    }
}

fn render_result<T>(name: &str, result: &ViewResult<T>, render: fn(&T) -> String) -> String {
    match result {
        ViewResult::Ok(payload) => render(payload),
        ViewResult::Degraded(degradation) => degraded(name, degradation),
    }
}

fn degraded(name: &str, degradation: &Degradation) -> String {
    format!(
        "{}\n{}\n",
        name.yellow().bold(),
        degradation.reason.red()
    )
}

/// Markdown-style table of the ranked countries.
pub fn summary(summary: &TopSummary) -> String {
    let mut out = format!("{}\n", summary.title.yellow().bold());
    if summary.entries.is_empty() {
        out.push_str("(no values)\n");
        return out;
    }

    let column = summary.indicator.column();
    out.push_str(&format!("| country | {} |\n", column));
    out.push_str(&format!("|---------|{}|\n", "-".repeat(column.len() + 2)));
    for entry in &summary.entries {
        out.push_str(&format!("| {} | {} |\n", entry.country, entry.value));
    }
    out
}

pub fn choropleth(series: &ChoroplethSeries) -> String {
    let mut out = format!("{}\n", format!("Map: {}", series.title).yellow().bold());
    for point in &series.points {
        let value = point
            .value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        match &point.region {
            Some(region) => out.push_str(&format!(
                "  {} {:<34} {:>10}  [{}]\n",
                point.iso_a3, point.country, value, region
            )),
            None => out.push_str(&format!(
                "  {} {:<34} {:>10}\n",
                point.iso_a3, point.country, value
            )),
        }
    }
    out
}

pub fn scatter(series: &ScatterSeries) -> String {
    let mut out = format!("{}\n", series.title.yellow().bold());
    out.push_str(&format!(
        "  {:<34} {:>12} {:>12}\n",
        "country", "facilities", series.y_label
    ));
    for point in &series.points {
        out.push_str(&format!(
            "  {:<34} {:>12} {:>12}",
            point.country, point.healthcare_facilities, point.value
        ));
        if let Some(region) = &point.region {
            out.push_str(&format!("  [{}]", region));
        }
        if let Some(size) = point.size_hint {
            out.push_str(&format!("  size={}", size));
        }
        out.push('\n');
    }
    out
}

/// The data table widget.
pub fn preview(preview: &DataPreview) -> String {
    let mut out = format!("{}\n", "Data".yellow().bold());
    out.push_str(&preview.headers.join(" | "));
    out.push('\n');
    for row in &preview.rows {
        out.push_str(&row.join(" | "));
        out.push('\n');
    }
    if preview.truncated {
        out.push_str(&format!(
            "... {} of {} rows shown\n",
            preview.rows.len(),
            preview.total_rows
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthatlas::views::RankedEntry;
    use healthatlas::{HealthAtlas, Indicator};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_summary_table() {
        plain();
        let text = summary(&TopSummary {
            indicator: Indicator::VaccinationRate,
            title: "Top 3 Countries by Vaccination Rate".to_string(),
            entries: vec![
                RankedEntry {
                    country: "Egypt".to_string(),
                    value: 96.0,
                },
                RankedEntry {
                    country: "Ghana".to_string(),
                    value: 94.5,
                },
            ],
        });

        assert!(text.starts_with("Top 3 Countries by Vaccination Rate\n"));
        assert!(text.contains("| country | vaccination_rate |"));
        assert!(text.contains("| Egypt | 96 |"));
        assert!(text.contains("| Ghana | 94.5 |"));
    }

    #[test]
    fn test_degraded_panel_shows_reason() {
        plain();
        let loaded = HealthAtlas::new()
            .load_bytes(b"country,vaccination_rate\nKenya,80\n")
            .unwrap();
        let dashboard = loaded.dashboard(Indicator::VaccinationRate);

        let text = frame(dashboard.frame());
        assert!(text.contains("missing healthcare_facilities column"));
        assert!(text.contains("| Kenya | 80 |"));
        assert!(text.contains("KEN Kenya"));
    }

    #[test]
    fn test_preview_truncation_note() {
        plain();
        let text = preview(&DataPreview {
            headers: vec!["country".to_string(), "iso_a3".to_string()],
            rows: vec![vec!["Kenya".to_string(), "KEN".to_string()]],
            total_rows: 4,
            truncated: true,
        });
        assert!(text.contains("country | iso_a3"));
        assert!(text.contains("1 of 4 rows shown"));
    }
}
