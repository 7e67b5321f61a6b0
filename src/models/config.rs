//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings needed to reach the client backend.
pub struct ApiConfig {
    /// Base address of the REST backend, e.g. `http://192.168.43.81:3000/`.
    pub api_base_url: String,
    /// Overrides the transport's default request timeout when set.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
