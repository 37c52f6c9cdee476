//! Errors the client-side engine can return.
//!
//! - [`InvalidAmount`] when user input is not a usable dollar amount.
//! - [`MissingField`] when a request lacks something only the user can supply.
//! - [`Session`] when the session file cannot be written.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`MissingField`]: EngineError::MissingField
//!  [`Session`]: EngineError::Session
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Session storage failed: {0}")]
    Session(#[from] std::io::Error),
    #[error("Session encoding failed: {0}")]
    SessionEncoding(#[from] serde_json::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::MissingField(a), Self::MissingField(b)) => a == b,
            (Self::Session(a), Self::Session(b)) => a.kind() == b.kind(),
            (Self::SessionEncoding(a), Self::SessionEncoding(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
