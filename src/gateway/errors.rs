use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Client not found")]
    NotFound,

    #[error("Connection error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid base url: {0}")]
    InvalidBaseUrl(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        // Status codes are handled before the body is read.
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Network(err.to_string())
        }
    }
}

impl From<TypeConstraintError> for GatewayError {
    fn from(err: TypeConstraintError) -> Self {
        GatewayError::Decode(err.to_string())
    }
}
