//! Reports produced by the normalizer.

use serde::{Deserialize, Serialize};

/// Missing values filled in one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Imputation {
    /// Column that was imputed.
    pub column: String,
    /// Median computed before imputation.
    pub median: f64,
    /// Number of cells filled.
    pub values_filled: usize,
}

/// A column whose name changed during canonicalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamedColumn {
    pub from: String,
    pub to: String,
}

/// What the normalizer changed. Observability only; nothing downstream
/// branches on these figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizeReport {
    /// Rows before normalization.
    pub rows_in: usize,
    /// Rows after deduplication.
    pub rows_out: usize,
    /// Column names changed by canonicalization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub renamed_columns: Vec<RenamedColumn>,
    /// Country cells whose text changed when title-cased.
    pub countries_retitled: usize,
    /// Imputed columns, in table order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imputations: Vec<Imputation>,
    /// Exact duplicate rows removed.
    pub duplicates_removed: usize,
}

impl NormalizeReport {
    /// Total cells filled across all imputed columns.
    pub fn values_imputed(&self) -> usize {
        self.imputations.iter().map(|i| i.values_filled).sum()
    }

    /// Whether normalization changed anything at all.
    pub fn is_noop(&self) -> bool {
        self.renamed_columns.is_empty()
            && self.countries_retitled == 0
            && self.imputations.is_empty()
            && self.duplicates_removed == 0
    }
}
