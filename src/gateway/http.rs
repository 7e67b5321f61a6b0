use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};

use crate::domain::client::ClientRecord;
use crate::domain::stats::StatsSummary;
use crate::domain::types::AccountNumber;
use crate::gateway::errors::{GatewayError, GatewayResult};
use crate::gateway::{ClientReader, ClientWriter};
use crate::models::client::ClientRecord as WireClientRecord;
use crate::models::config::ApiConfig;

const CLIENT_RESOURCE: &str = "client";
const STATS_RESOURCE: &str = "stats";

/// reqwest implementation of [`ClientReader`] and [`ClientWriter`].
#[derive(Clone, Debug)]
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &ApiConfig) -> GatewayResult<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| GatewayError::InvalidBaseUrl(format!("{}: {e}", config.api_base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base address, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> GatewayResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_clients(&self) -> GatewayResult<Vec<ClientRecord>> {
        let url = self.endpoint(&[CLIENT_RESOURCE])?;
        log::debug!("GET {url}");

        let response = check_status(self.http.get(url).send().await?).await?;
        let records: Vec<WireClientRecord> = response.json().await?;

        records
            .into_iter()
            .map(|record| ClientRecord::try_from(record).map_err(GatewayError::from))
            .collect()
    }
}

/// Turns non-2xx responses into errors, keeping the body as the message.
async fn check_status(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(GatewayError::NotFound);
    }

    let message = response.text().await.unwrap_or_default();
    Err(GatewayError::Status { status, message })
}

fn log_failure<T>(operation: &str, result: GatewayResult<T>) -> GatewayResult<T> {
    if let Err(err) = &result {
        log::error!("Failed to {operation}: {err}");
    }
    result
}

#[async_trait]
impl ClientReader for HttpGateway {
    async fn list_clients(&self) -> GatewayResult<Vec<ClientRecord>> {
        log_failure("list clients", self.fetch_clients().await)
    }

    async fn get_stats(&self) -> GatewayResult<StatsSummary> {
        let result = async {
            let url = self.endpoint(&[CLIENT_RESOURCE, STATS_RESOURCE])?;
            log::debug!("GET {url}");
            let response = check_status(self.http.get(url).send().await?).await?;
            Ok::<_, GatewayError>(response.json::<StatsSummary>().await?)
        }
        .await;

        log_failure("fetch statistics", result)
    }

    async fn ping(&self) -> GatewayResult<usize> {
        let clients = log_failure("reach the backend", self.fetch_clients().await)?;
        Ok(clients.len())
    }
}

#[async_trait]
impl ClientWriter for HttpGateway {
    async fn create_client(&self, record: &ClientRecord) -> GatewayResult<()> {
        let result = async {
            let url = self.endpoint(&[CLIENT_RESOURCE])?;
            log::debug!("POST {url}");
            let body = WireClientRecord::from(record);
            check_status(self.http.post(url).json(&body).send().await?).await?;
            Ok::<_, GatewayError>(())
        }
        .await;

        log_failure("add client", result)
    }

    async fn update_client(
        &self,
        account_number: &AccountNumber,
        record: &ClientRecord,
    ) -> GatewayResult<()> {
        let result = async {
            let url = self.endpoint(&[CLIENT_RESOURCE, account_number.as_str()])?;
            log::debug!("PATCH {url}");
            let body = WireClientRecord::from(record);
            check_status(self.http.patch(url).json(&body).send().await?).await?;
            Ok::<_, GatewayError>(())
        }
        .await;

        log_failure("update client", result)
    }

    async fn delete_client(&self, account_number: &AccountNumber) -> GatewayResult<()> {
        let result = async {
            let url = self.endpoint(&[CLIENT_RESOURCE, account_number.as_str()])?;
            log::debug!("DELETE {url}");
            check_status(self.http.delete(url).send().await?).await?;
            Ok::<_, GatewayError>(())
        }
        .await;

        log_failure("delete client", result)
    }
}
