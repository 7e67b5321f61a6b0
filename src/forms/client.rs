use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{ClientRecord, UpdateClient};
use crate::domain::types::{AccountNumber, Balance, ClientName};
use crate::forms::FormError;

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for adding a client.
pub struct AddClientForm {
    #[validate(length(min = 1))]
    pub account_number: String,
    #[validate(length(min = 1))]
    pub name: String,
    /// Raw balance text as typed by the operator.
    #[validate(length(min = 1))]
    pub balance: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Form data for editing an existing client. The account number is fixed.
pub struct EditClientForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub balance: String,
}

fn parse_balance(raw: &str) -> Result<Balance, FormError> {
    raw.parse::<Balance>()
        .map_err(|e| FormError::InvalidBalance(e.to_string()))
}

impl TryFrom<AddClientForm> for ClientRecord {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let account_number =
            AccountNumber::new(form.account_number).map_err(|_| FormError::InvalidAccountNumber)?;
        let name = ClientName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let balance = parse_balance(&form.balance)?;

        Ok(ClientRecord::new(account_number, name, balance))
    }
}

impl TryFrom<EditClientForm> for UpdateClient {
    type Error = FormError;

    fn try_from(form: EditClientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = ClientName::new(form.name).map_err(|_| FormError::InvalidName)?;
        let balance = parse_balance(&form.balance)?;

        Ok(UpdateClient::new(name, balance))
    }
}
