//! Operator input validated before it reaches the gateway.

use thiserror::Error;
use validator::ValidationErrors;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid account number")]
    InvalidAccountNumber,

    #[error("invalid name")]
    InvalidName,

    #[error("invalid balance: {0}")]
    InvalidBalance(String),
}
