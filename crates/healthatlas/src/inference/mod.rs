//! Column type inference.
//!
//! Classifies each column as integer, float, string or unknown and computes
//! the numeric statistics the normalizer needs for imputation.

mod statistical;

pub use statistical::{
    StatisticalAnalysis, StatisticalAnalyzer, median, parse_numeric,
};
