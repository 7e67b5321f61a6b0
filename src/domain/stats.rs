use serde::{Deserialize, Serialize};

/// Aggregate balance statistics reported by the backend.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    pub total: f64,
    pub min: f64,
    pub max: f64,
}

/// Where the total/min/max of a [`BalanceStatistics`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsSource {
    Server,
    Local,
}

/// Statistics shown on the list and statistics screens.
///
/// `min`, `max` and `average` are `None` when there is nothing to aggregate,
/// so an empty set never looks like a zero-balance record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceStatistics {
    pub count: usize,
    pub total: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
    pub source: StatsSource,
}

/// Number of clients per balance category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub insufficient: usize,
    pub moderate: usize,
    pub high: usize,
}
