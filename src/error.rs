//! Errors raised while talking to the cafe backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response payload: {0}")]
    UnexpectedPayload(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Login was refused for {email}")]
    LoginRefused { email: String },

    #[error("Request to {path} was rejected with status {status}")]
    Rejected {
        status: reqwest::StatusCode,
        path: String,
    },
}
