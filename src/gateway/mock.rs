//! Mock gateway implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::client::ClientRecord;
use crate::domain::stats::StatsSummary;
use crate::domain::types::AccountNumber;
use crate::gateway::errors::GatewayResult;
use crate::gateway::{ClientReader, ClientWriter};

mock! {
    pub Gateway {}

    #[async_trait]
    impl ClientReader for Gateway {
        async fn list_clients(&self) -> GatewayResult<Vec<ClientRecord>>;
        async fn get_stats(&self) -> GatewayResult<StatsSummary>;
        async fn ping(&self) -> GatewayResult<usize>;
    }

    #[async_trait]
    impl ClientWriter for Gateway {
        async fn create_client(&self, record: &ClientRecord) -> GatewayResult<()>;
        async fn update_client(
            &self,
            account_number: &AccountNumber,
            record: &ClientRecord,
        ) -> GatewayResult<()>;
        async fn delete_client(&self, account_number: &AccountNumber) -> GatewayResult<()>;
    }
}
