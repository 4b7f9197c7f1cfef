// Path: crates/client/src/error.rs
//! Errors returned by the query clients.

use roflscan_types::error::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, TLS, IO, timeout).
    #[error("Transport error: {0}")]
    Transport(String),
    /// The gateway reported that the requested object does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
    /// The gateway answered with a non-success status.
    #[error("Gateway returned status {code}: {message}")]
    Status { code: u16, message: String },
    /// The response body was malformed or failed validation.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "CLIENT_TRANSPORT",
            Self::NotFound(_) => "CLIENT_NOT_FOUND",
            Self::Status { .. } => "CLIENT_STATUS",
            Self::Decode(_) => "CLIENT_DECODE",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}
