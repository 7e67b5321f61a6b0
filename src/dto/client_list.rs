//! DTOs shaped for the client list and statistics screens.

use serde::Serialize;

use crate::domain::client::{BalanceCategory, ClientRecord};
use crate::domain::stats::{BalanceStatistics, CategoryBreakdown, StatsSource};
use crate::services::client_list::ViewState;
use crate::services::stats;

/// Shown instead of a figure that does not exist (min/max of nothing).
pub const MISSING_AMOUNT: &str = "n/a";

/// Formats an amount with two decimals and the currency sign.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{value:.2} €"),
        None => MISSING_AMOUNT.to_string(),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientRow {
    pub account_number: String,
    pub name: String,
    pub balance: String,
    pub category: BalanceCategory,
    pub category_label: &'static str,
}

impl From<&ClientRecord> for ClientRow {
    fn from(record: &ClientRecord) -> Self {
        let category = record.category();
        Self {
            account_number: record.account_number.to_string(),
            name: record.name.to_string(),
            balance: format_amount(Some(record.balance.get())),
            category,
            category_label: category.label(),
        }
    }
}

/// Statistics block; every field has a printable value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsPanel {
    pub count: usize,
    pub total: String,
    pub min: String,
    pub max: String,
    pub average: String,
    /// False while the server summary has not arrived.
    pub from_server: bool,
}

impl From<&BalanceStatistics> for StatsPanel {
    fn from(stats: &BalanceStatistics) -> Self {
        Self {
            count: stats.count,
            total: format_amount(Some(stats.total)),
            min: format_amount(stats.min),
            max: format_amount(stats.max),
            average: format_amount(stats.average),
            from_server: stats.source == StatsSource::Server,
        }
    }
}

/// Data required to render the client list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientListPage {
    Loading,
    /// Persistent error view with a retry action.
    Error { message: String },
    Loaded {
        rows: Vec<ClientRow>,
        stats: StatsPanel,
        breakdown: CategoryBreakdown,
    },
}

impl From<&ViewState> for ClientListPage {
    fn from(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => ClientListPage::Loading,
            ViewState::Error(message) => ClientListPage::Error {
                message: message.clone(),
            },
            ViewState::Loaded {
                clients,
                stats: summary,
            } => ClientListPage::Loaded {
                rows: clients.iter().map(ClientRow::from).collect(),
                stats: StatsPanel::from(&stats::aggregate(summary.as_ref(), clients)),
                breakdown: stats::category_breakdown(clients),
            },
        }
    }
}
