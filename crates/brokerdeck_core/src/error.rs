//! Error types for the management API client and console domain logic.
use thiserror::Error;

/// Top-level console error type.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Management API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConsoleError {
    /// Message suitable for direct display in the console UI.
    ///
    /// API failures surface only the management payload's message field;
    /// the HTTP status stays in logs.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
