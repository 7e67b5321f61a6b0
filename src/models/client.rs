use serde::{Deserialize, Serialize};

use crate::domain::client::ClientRecord as DomainClientRecord;
use crate::domain::types::{AccountNumber, Balance, ClientName, TypeConstraintError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Wire model for [`crate::domain::client::ClientRecord`].
pub struct ClientRecord {
    #[serde(rename = "numCompte")]
    pub account_number: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(rename = "solde")]
    pub balance: f64,
}

impl TryFrom<ClientRecord> for DomainClientRecord {
    type Error = TypeConstraintError;

    fn try_from(record: ClientRecord) -> Result<Self, Self::Error> {
        Ok(Self::new(
            AccountNumber::new(record.account_number)?,
            ClientName::new(record.name)?,
            Balance::new(record.balance)?,
        ))
    }
}

impl From<&DomainClientRecord> for ClientRecord {
    fn from(record: &DomainClientRecord) -> Self {
        Self {
            account_number: record.account_number.to_string(),
            name: record.name.to_string(),
            balance: record.balance.get(),
        }
    }
}
