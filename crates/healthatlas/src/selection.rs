//! The active indicator and the selection cell that holds it.

use serde::{Deserialize, Serialize};

use crate::normalize::title_case;

/// Health indicator that drives the derived views.
///
/// An indicator is a column *key*; a given dataset may not contain it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    #[default]
    VaccinationRate,
    AccessToWater,
    MalariaPrevalence,
    HivPrevalence,
    AccessToSanitation,
}

impl Indicator {
    /// Every selectable indicator, in widget order.
    pub const ALL: [Indicator; 5] = [
        Indicator::VaccinationRate,
        Indicator::AccessToWater,
        Indicator::MalariaPrevalence,
        Indicator::HivPrevalence,
        Indicator::AccessToSanitation,
    ];

    /// Column name this indicator reads.
    pub fn column(&self) -> &'static str {
        match self {
            Indicator::VaccinationRate => "vaccination_rate",
            Indicator::AccessToWater => "access_to_water",
            Indicator::MalariaPrevalence => "malaria_prevalence",
            Indicator::HivPrevalence => "hiv_prevalence",
            Indicator::AccessToSanitation => "access_to_sanitation",
        }
    }

    /// Human-readable label, e.g. `Vaccination Rate`.
    pub fn label(&self) -> String {
        title_case(&self.column().replace('_', " "))
    }
}

impl std::str::FromStr for Indicator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-'], "_");
        Indicator::ALL
            .into_iter()
            .find(|i| i.column() == key)
            .ok_or_else(|| {
                let options: Vec<&str> = Indicator::ALL.iter().map(|i| i.column()).collect();
                format!("Unknown indicator: {}. Use: {}.", s, options.join(", "))
            })
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

type Listener = Box<dyn FnMut(&Indicator, u64) + Send>;

/// Single cell holding the active indicator.
///
/// Every write is committed (value and revision updated) before any
/// listener runs. Listeners run synchronously in subscription order.
pub struct SelectionState {
    current: Indicator,
    revision: u64,
    listeners: Vec<Listener>,
}

impl SelectionState {
    /// Create a selection holding `initial` at revision 0.
    pub fn new(initial: Indicator) -> Self {
        Self {
            current: initial,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    /// The active indicator.
    pub fn current(&self) -> Indicator {
        self.current
    }

    /// Number of writes committed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a listener called with the new indicator and revision after
    /// each write. Returns its position in notification order.
    pub fn subscribe(&mut self, listener: impl FnMut(&Indicator, u64) + Send + 'static) -> usize {
        self.listeners.push(Box::new(listener));
        self.listeners.len() - 1
    }

    /// Commit a new indicator and notify listeners.
    ///
    /// Writing the value already held is still a write: listeners run again.
    pub fn set(&mut self, indicator: Indicator) {
        self.current = indicator;
        self.revision += 1;
        let (current, revision) = (self.current, self.revision);
        for listener in &mut self.listeners {
            listener(&current, revision);
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(Indicator::default())
    }
}

impl std::fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionState")
            .field("current", &self.current)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
