//! Reactive controller: selection writes drive view recomputation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{CanonicalDataset, DataPreview};
use crate::error::Result;
use crate::export::export_csv;
use crate::selection::{Indicator, SelectionState};
use crate::views::{
    ChoroplethSeries, ScatterSeries, TopSummary, ViewResult, build_choropleth, build_scatter,
    summarize,
};

/// Output of one derived view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Panel {
    Summary { result: ViewResult<TopSummary> },
    Choropleth { result: ViewResult<ChoroplethSeries> },
    Scatter { result: ViewResult<ScatterSeries> },
}

impl Panel {
    /// Whether the view rendered a degradation notice instead of a payload.
    pub fn is_degraded(&self) -> bool {
        match self {
            Panel::Summary { result } => result.is_degraded(),
            Panel::Choropleth { result } => result.is_degraded(),
            Panel::Scatter { result } => result.is_degraded(),
        }
    }
}

/// A pure function of `(dataset, indicator)` registered with the dashboard.
pub trait DerivedView: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Compute the view. Must not fail; faults become degradations.
    fn evaluate(&self, dataset: &CanonicalDataset, indicator: Indicator) -> Panel;
}

/// Top-3 ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryView;

impl DerivedView for SummaryView {
    fn name(&self) -> &'static str {
        "summary"
    }

    fn evaluate(&self, dataset: &CanonicalDataset, indicator: Indicator) -> Panel {
        Panel::Summary {
            result: summarize(dataset, indicator),
        }
    }
}

/// Map series.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoroplethView;

impl DerivedView for ChoroplethView {
    fn name(&self) -> &'static str {
        "choropleth"
    }

    fn evaluate(&self, dataset: &CanonicalDataset, indicator: Indicator) -> Panel {
        Panel::Choropleth {
            result: build_choropleth(dataset, indicator),
        }
    }
}

/// Facilities-vs-indicator series.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterView;

impl DerivedView for ScatterView {
    fn name(&self) -> &'static str {
        "scatter"
    }

    fn evaluate(&self, dataset: &CanonicalDataset, indicator: Indicator) -> Panel {
        Panel::Scatter {
            result: build_scatter(dataset, indicator),
        }
    }
}

/// Every view's output for one committed selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub indicator: Indicator,
    /// Selection revision this frame was computed for.
    pub revision: u64,
    /// One panel per registered view, in registration order.
    pub panels: Vec<Panel>,
}

type FrameListener = Box<dyn FnMut(&DashboardFrame) + Send>;

/// Owns the selection cell and recomputes every registered view after each
/// write, synchronously and in registration order.
///
/// There is no caching: writing the same indicator twice recomputes twice,
/// and the result is identical because the dataset never changes.
pub struct Dashboard {
    dataset: Arc<CanonicalDataset>,
    selection: SelectionState,
    views: Vec<Box<dyn DerivedView>>,
    frame: DashboardFrame,
    listeners: Vec<FrameListener>,
}

impl Dashboard {
    /// Dashboard with the summary, choropleth and scatter views.
    pub fn new(dataset: Arc<CanonicalDataset>, initial: Indicator) -> Self {
        Self::with_views(
            dataset,
            initial,
            vec![
                Box::new(SummaryView),
                Box::new(ChoroplethView),
                Box::new(ScatterView),
            ],
        )
    }

    /// Dashboard with a custom set of views.
    pub fn with_views(
        dataset: Arc<CanonicalDataset>,
        initial: Indicator,
        views: Vec<Box<dyn DerivedView>>,
    ) -> Self {
        let selection = SelectionState::new(initial);
        let frame = compute_frame(&dataset, &views, initial, selection.revision());
        Self {
            dataset,
            selection,
            views,
            frame,
            listeners: Vec::new(),
        }
    }

    /// Read-only handle to the canonical dataset.
    pub fn dataset(&self) -> &Arc<CanonicalDataset> {
        &self.dataset
    }

    /// The active indicator.
    pub fn indicator(&self) -> Indicator {
        self.selection.current()
    }

    /// Register a listener on the selection cell itself. It runs after the
    /// write commits and before views recompute.
    pub fn subscribe_selection(
        &mut self,
        listener: impl FnMut(&Indicator, u64) + Send + 'static,
    ) -> usize {
        self.selection.subscribe(listener)
    }

    /// Views computed for the latest committed selection.
    pub fn frame(&self) -> &DashboardFrame {
        &self.frame
    }

    /// Register a listener called with every new frame.
    pub fn subscribe(&mut self, listener: impl FnMut(&DashboardFrame) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Commit a new indicator, recompute every view, then notify listeners.
    pub fn select(&mut self, indicator: Indicator) -> &DashboardFrame {
        self.selection.set(indicator);
        self.frame = compute_frame(
            &self.dataset,
            &self.views,
            self.selection.current(),
            self.selection.revision(),
        );
        for listener in &mut self.listeners {
            listener(&self.frame);
        }
        &self.frame
    }

    /// Serialize the full canonical dataset, whatever the selection.
    pub fn export_csv(&self) -> Result<Vec<u8>> {
        export_csv(&self.dataset)
    }

    /// First rows of the dataset for a table widget.
    pub fn preview(&self, limit: usize) -> DataPreview {
        self.dataset.preview(limit)
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let views: Vec<&str> = self.views.iter().map(|v| v.name()).collect();
        f.debug_struct("Dashboard")
            .field("selection", &self.selection)
            .field("views", &views)
            .field("rows", &self.dataset.len())
            .finish()
    }
}

fn compute_frame(
    dataset: &CanonicalDataset,
    views: &[Box<dyn DerivedView>],
    indicator: Indicator,
    revision: u64,
) -> DashboardFrame {
    let panels = views
        .iter()
        .map(|view| {
            debug!(view = view.name(), %indicator, revision, "evaluating view");
            view.evaluate(dataset, indicator)
        })
        .collect();

    DashboardFrame {
        indicator,
        revision,
        panels,
    }
}
