//! CSV/TSV parser with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{AtlasError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Label used in [`SourceMetadata`] for input that did not come from a file.
pub const IN_MEMORY_LABEL: &str = "<memory>";

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether the input has a header row.
    pub has_header: bool,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

impl ParserConfig {
    /// Parse a delimiter given on the command line or in configuration.
    ///
    /// Accepts a single ASCII character or one of `tab`, `comma`,
    /// `semicolon`, `pipe`.
    pub fn parse_delimiter(value: &str) -> Result<u8> {
        match value.to_ascii_lowercase().as_str() {
            "tab" | "\\t" | "\t" => Ok(b'\t'),
            "comma" => Ok(b','),
            "semicolon" => Ok(b';'),
            "pipe" => Ok(b'|'),
            other if other.len() == 1 && other.is_ascii() => Ok(other.as_bytes()[0]),
            _ => Err(AtlasError::InvalidDelimiter(value.to_string())),
        }
    }
}

/// Parses delimited tabular input.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| AtlasError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.parse_labeled(&contents, file, Some(path.to_path_buf()))
    }

    /// Parse bytes that arrived from somewhere other than a local file.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<(DataTable, SourceMetadata)> {
        self.parse_labeled(bytes, IN_MEMORY_LABEL.to_string(), None)
    }

    fn parse_labeled(
        &self,
        bytes: &[u8],
        file: String,
        path: Option<std::path::PathBuf>,
    ) -> Result<(DataTable, SourceMetadata)> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(AtlasError::DataUnavailable(format!("'{}' is empty", file)));
        }

        let mut hasher = Sha256::new();
        hasher.update(bytes);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(bytes)?,
        };

        let table = self.read_table(bytes, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            file = %file,
            format = %format,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed input"
        );

        let metadata = SourceMetadata::new(
            file,
            path,
            hash,
            bytes.len() as u64,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Read the table body with a known delimiter.
    fn read_table(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(self.config.has_header)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }
            records.push(result?);
        }

        let headers: Vec<String> = if self.config.has_header {
            reader.headers()?.iter().map(|s| s.to_string()).collect()
        } else {
            match records.first() {
                Some(record) => (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect(),
                None => {
                    return Err(AtlasError::DataUnavailable(
                        "No data rows found".to_string(),
                    ));
                }
            }
        };

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AtlasError::DataUnavailable("No columns found".to_string()));
        }

        let expected_cols = headers.len();
        let rows: Vec<Vec<String>> = records
            .into_iter()
            .map(|record| {
                let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
                row.resize(expected_cols, String::new());
                row
            })
            .collect();

        if rows.is_empty() {
            return Err(AtlasError::DataUnavailable("No data rows found".to_string()));
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(AtlasError::DataUnavailable(
            "No lines to analyze".to_string(),
        ));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts
                .iter()
                .map(|&c| (c as f64 - mean).powi(2))
                .sum::<f64>()
                / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab gets a small bonus.
        let score = if consistent {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
