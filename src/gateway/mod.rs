//! Typed access to the remote client backend.
//!
//! Every operation reports its own outcome through [`GatewayResult`]; there is
//! no shared error state between calls.

use async_trait::async_trait;

use crate::domain::client::ClientRecord;
use crate::domain::stats::StatsSummary;
use crate::domain::types::AccountNumber;
use crate::gateway::errors::GatewayResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use http::HttpGateway;

#[async_trait]
pub trait ClientReader: Send + Sync {
    async fn list_clients(&self) -> GatewayResult<Vec<ClientRecord>>;
    async fn get_stats(&self) -> GatewayResult<StatsSummary>;
    /// Probes the backend and returns how many clients it reported.
    async fn ping(&self) -> GatewayResult<usize>;
}

#[async_trait]
pub trait ClientWriter: Send + Sync {
    async fn create_client(&self, record: &ClientRecord) -> GatewayResult<()>;
    async fn update_client(
        &self,
        account_number: &AccountNumber,
        record: &ClientRecord,
    ) -> GatewayResult<()>;
    async fn delete_client(&self, account_number: &AccountNumber) -> GatewayResult<()>;
}
