//! Derived views over the canonical dataset.
//!
//! Each view is a pure function of `(dataset, indicator)`. A view checks its
//! own column preconditions against the dataset's [`TableSchema`] and
//! returns [`ViewResult::Degraded`] instead of failing, so one bad indicator
//! never takes down the other views.
//!
//! [`TableSchema`]: crate::schema::TableSchema

mod choropleth;
mod scatter;
mod summary;

pub use choropleth::{ChoroplethPoint, ChoroplethSeries, build_choropleth};
pub use scatter::{
    HEALTHCARE_FACILITIES_COLUMN, MISSING_FACILITIES_REASON, REGION_COLUMN, ScatterPoint,
    ScatterSeries, build_scatter,
};
pub use summary::{RankedEntry, TOP_N, TopSummary, summarize};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Why a view could not produce its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradationKind {
    /// A column the view needs is absent.
    MissingColumn,
    /// A value could not be used while building the payload.
    ComputationFault,
}

/// Degradation notice rendered in place of a view's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degradation {
    pub kind: DegradationKind,
    /// Human-readable reason.
    pub reason: String,
}

impl Degradation {
    pub fn missing_column(reason: impl Into<String>) -> Self {
        Self {
            kind: DegradationKind::MissingColumn,
            reason: reason.into(),
        }
    }

    pub fn computation_fault(reason: impl Into<String>) -> Self {
        Self {
            kind: DegradationKind::ComputationFault,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Degradation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reason)
    }
}

/// Outcome of a derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum ViewResult<T> {
    Ok(T),
    Degraded(Degradation),
}

impl<T> ViewResult<T> {
    /// The payload, if the view succeeded.
    pub fn ok(&self) -> Option<&T> {
        match self {
            ViewResult::Ok(payload) => Some(payload),
            ViewResult::Degraded(_) => None,
        }
    }

    /// The degradation notice, if the view failed.
    pub fn degradation(&self) -> Option<&Degradation> {
        match self {
            ViewResult::Ok(_) => None,
            ViewResult::Degraded(d) => Some(d),
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ViewResult::Degraded(_))
    }

    /// Wrap a view computation, logging degradations.
    pub(crate) fn from_computation(view: &str, result: Result<T, Degradation>) -> Self {
        match result {
            Ok(payload) => ViewResult::Ok(payload),
            Err(degradation) => {
                warn!(view, kind = ?degradation.kind, reason = %degradation.reason, "view degraded");
                ViewResult::Degraded(degradation)
            }
        }
    }
}
