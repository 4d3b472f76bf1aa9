//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use healthatlas::{AtlasConfig, Indicator, ParserConfig};

/// HealthAtlas: indicator dashboard for African public-health data
#[derive(Parser)]
#[command(name = "healthatlas")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Options shared by every command that ingests a data file.
#[derive(Args, Clone, Debug)]
pub struct IngestArgs {
    /// Path to the data file (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Field delimiter (a character, or tab/comma/semicolon/pipe). Auto-detected by default
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Read at most this many data rows
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Column holding country names
    #[arg(long, default_value = "country")]
    pub country_column: String,
}

impl IngestArgs {
    /// Build and validate the pipeline configuration.
    pub fn config(&self) -> healthatlas::Result<AtlasConfig> {
        let mut config = AtlasConfig::default().with_country_column(&self.country_column);
        if let Some(delimiter) = &self.delimiter {
            config = config.with_delimiter(ParserConfig::parse_delimiter(delimiter)?);
        }
        if let Some(rows) = self.max_rows {
            config = config.with_max_rows(rows);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a raw file and write the canonical cache
    Clean {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Output path for the cache (default: cleaned_africa_health_data.csv next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render every view for one indicator
    Views {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Indicator to display
        #[arg(short, long, default_value_t = Indicator::default())]
        indicator: Indicator,

        /// Rows of the data table to show
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactively switch indicators and watch the views update
    Explore {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Indicator selected at startup
        #[arg(short, long, default_value_t = Indicator::default())]
        indicator: Indicator,
    },

    /// Write the full canonical dataset as CSV
    Export {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Output path (default: health_data.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show ingestion summary: rows kept, excluded, imputed
    Status {
        #[command(flatten)]
        ingest: IngestArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_views_indicator() {
        let cli = Cli::parse_from([
            "healthatlas",
            "views",
            "data.csv",
            "--indicator",
            "HIV Prevalence",
        ]);
        let Commands::Views { indicator, rows, .. } = cli.command else {
            panic!("expected views");
        };
        assert_eq!(indicator, Indicator::HivPrevalence);
        assert_eq!(rows, 10);
    }

    #[test]
    fn test_unknown_indicator_rejected() {
        let result = Cli::try_parse_from(["healthatlas", "views", "data.csv", "-i", "gdp"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ingest_config() {
        let cli = Cli::parse_from([
            "healthatlas",
            "status",
            "data.tsv",
            "--delimiter",
            "tab",
            "--max-rows",
            "5",
        ]);
        let Commands::Status { ingest, .. } = cli.command else {
            panic!("expected status");
        };
        let config = ingest.config().unwrap();
        assert_eq!(config.parser.delimiter, Some(b'\t'));
        assert_eq!(config.parser.max_rows, Some(5));
    }

    #[test]
    fn test_bad_delimiter_is_error() {
        let cli = Cli::parse_from(["healthatlas", "status", "data.csv", "-d", "::"]);
        let Commands::Status { ingest, .. } = cli.command else {
            panic!("expected status");
        };
        assert!(ingest.config().is_err());
    }
}
