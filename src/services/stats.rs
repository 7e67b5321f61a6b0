//! Balance statistics over the client set.
//!
//! Server figures win for `total`, `min` and `max` whenever they are present;
//! `average` and the category breakdown are always derived locally because no
//! endpoint provides them.

use crate::domain::client::{BalanceCategory, ClientRecord};
use crate::domain::stats::{BalanceStatistics, CategoryBreakdown, StatsSource, StatsSummary};

/// Computes total/min/max from the local collection, `None` when it is empty.
pub fn summarize(clients: &[ClientRecord]) -> Option<StatsSummary> {
    let mut balances = clients.iter().map(|c| c.balance.get());
    let first = balances.next()?;

    let summary = balances.fold(
        StatsSummary {
            total: first,
            min: first,
            max: first,
        },
        |acc, b| StatsSummary {
            total: acc.total + b,
            min: acc.min.min(b),
            max: acc.max.max(b),
        },
    );
    Some(summary)
}

/// Mean balance, `None` for an empty collection.
pub fn average(clients: &[ClientRecord]) -> Option<f64> {
    if clients.is_empty() {
        return None;
    }
    let total: f64 = clients.iter().map(|c| c.balance.get()).sum();
    Some(total / clients.len() as f64)
}

/// Combines the server summary (if any) with figures derived from `clients`.
pub fn aggregate(server: Option<&StatsSummary>, clients: &[ClientRecord]) -> BalanceStatistics {
    let count = clients.len();
    let average = average(clients);

    match server {
        Some(summary) => BalanceStatistics {
            count,
            total: summary.total,
            min: (count > 0).then_some(summary.min),
            max: (count > 0).then_some(summary.max),
            average,
            source: StatsSource::Server,
        },
        None => {
            let local = summarize(clients);
            BalanceStatistics {
                count,
                total: local.map_or(0.0, |s| s.total),
                min: local.map(|s| s.min),
                max: local.map(|s| s.max),
                average,
                source: StatsSource::Local,
            }
        }
    }
}

/// Counts clients per balance category.
pub fn category_breakdown(clients: &[ClientRecord]) -> CategoryBreakdown {
    clients
        .iter()
        .fold(CategoryBreakdown::default(), |mut acc, client| {
            match client.category() {
                BalanceCategory::Insufficient => acc.insufficient += 1,
                BalanceCategory::Moderate => acc.moderate += 1,
                BalanceCategory::High => acc.high += 1,
            }
            acc
        })
}
