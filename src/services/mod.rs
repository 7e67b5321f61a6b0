use thiserror::Error;

use crate::forms::FormError;
use crate::gateway::errors::GatewayError;

pub mod client;
pub mod client_list;
pub mod stats;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(#[from] FormError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Another change is still being saved")]
    Busy,

    #[error("The client list is no longer active")]
    Detached,

    #[error("Unexpected error: {0}")]
    Fatal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
