//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when calling the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("catalog service returned {status}{}", format_message(.message))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message the service attached to the failure, when it sent one.
        message: Option<String>,
    },

    /// The service answered 2xx but the body did not parse.
    #[error("malformed catalog response: {0}")]
    Body(#[from] serde_json::Error),
}

impl CatalogError {
    /// HTTP status code, when the service produced a response at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Body(_) => None,
        }
    }

    /// Message the service attached to a failure response.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Body(_) => None,
        }
    }
}

fn format_message(message: &Option<String>) -> String {
    message
        .as_ref()
        .map_or_else(String::new, |m| format!(": {m}"))
}
