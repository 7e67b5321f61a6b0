//! Client mutations: form validation followed by exactly one gateway call.

use crate::domain::client::{ClientRecord, UpdateClient};
use crate::domain::types::AccountNumber;
use crate::forms::client::{AddClientForm, EditClientForm};
use crate::gateway::ClientWriter;
use crate::services::ServiceResult;

/// Validates the add-client form and submits the new record.
pub async fn add_client<G>(gateway: &G, form: AddClientForm) -> ServiceResult<ClientRecord>
where
    G: ClientWriter + ?Sized,
{
    let record = ClientRecord::try_from(form).map_err(|err| {
        log::warn!("Rejected add-client form: {err}");
        err
    })?;

    gateway.create_client(&record).await?;
    log::info!("Added client {}", record.account_number);

    Ok(record)
}

/// Validates the edit form and submits the updated record.
pub async fn edit_client<G>(
    gateway: &G,
    account_number: &AccountNumber,
    form: EditClientForm,
) -> ServiceResult<ClientRecord>
where
    G: ClientWriter + ?Sized,
{
    let record = UpdateClient::try_from(form)
        .map_err(|err| {
            log::warn!("Rejected edit form for {account_number}: {err}");
            err
        })?
        .apply_to(account_number.clone());

    gateway.update_client(account_number, &record).await?;
    log::info!("Updated client {account_number}");

    Ok(record)
}

/// Removes the client identified by `account_number`.
pub async fn delete_client<G>(gateway: &G, account_number: &AccountNumber) -> ServiceResult<()>
where
    G: ClientWriter + ?Sized,
{
    gateway.delete_client(account_number).await?;
    log::info!("Deleted client {account_number}");

    Ok(())
}
