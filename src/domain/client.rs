use serde::{Deserialize, Serialize};

use crate::domain::types::{AccountNumber, Balance, ClientName};

/// Upper bound (exclusive) of the [`BalanceCategory::Insufficient`] tier.
pub const MODERATE_THRESHOLD: f64 = 1000.0;
/// Upper bound (inclusive) of the [`BalanceCategory::Moderate`] tier.
pub const HIGH_THRESHOLD: f64 = 5000.0;

/// Three-tier classification derived from a balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceCategory {
    Insufficient,
    Moderate,
    High,
}

impl BalanceCategory {
    /// Classifies a balance. Both thresholds belong to `Moderate`.
    pub fn of(balance: Balance) -> Self {
        let amount = balance.get();
        if amount < MODERATE_THRESHOLD {
            Self::Insufficient
        } else if amount <= HIGH_THRESHOLD {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Lower-case label used by list rows.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

/// Bank client entry as known to the backend.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClientRecord {
    pub account_number: AccountNumber,
    pub name: ClientName,
    pub balance: Balance,
}

impl ClientRecord {
    #[must_use]
    pub fn new(account_number: AccountNumber, name: ClientName, balance: Balance) -> Self {
        Self {
            account_number,
            name,
            balance,
        }
    }

    /// Category for the current balance; never stored.
    pub fn category(&self) -> BalanceCategory {
        BalanceCategory::of(self.balance)
    }
}

/// Mutable part of a client record.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateClient {
    pub name: ClientName,
    pub balance: Balance,
}

impl UpdateClient {
    #[must_use]
    pub fn new(name: ClientName, balance: Balance) -> Self {
        Self { name, balance }
    }

    /// Applies the changes to the record identified by `account_number`.
    pub fn apply_to(self, account_number: AccountNumber) -> ClientRecord {
        ClientRecord::new(account_number, self.name, self.balance)
    }
}
