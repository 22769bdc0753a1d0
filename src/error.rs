// src/error.rs
use thiserror::Error;

use crate::core::net::TransportError;

/// Everything that can end a lookup attempt. None of these are retried; each
/// one replaces the results region with its `Display` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Enter a device name to search, for example: Samsung S24 Ultra.")]
    EmptyQuery,

    /// Request never produced a response. `detail` is for the log only.
    #[error(
        "Network error (possible CORS block): the request was blocked or the API is unreachable. \
         The server may refuse calls from this origin; try again through a proxy server."
    )]
    NetworkError { detail: String },

    #[error("API error: failed to fetch data (status {status})")]
    ApiError { status: u16 },

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),

    #[error("No results found for \"{query}\".")]
    NotFound { query: String },

    #[error("Specifications are not available for this device: {subject}.")]
    NoSpecs { subject: String },
}

/// Building a controller from options failed.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid endpoint {0:?}: {1}")]
    InvalidEndpoint(String, #[source] url::ParseError),
    #[error("cannot build HTTP client: {0}")]
    Transport(#[from] TransportError),
}

impl LookupError {
    /// Short tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::EmptyQuery => "EmptyQuery",
            LookupError::NetworkError { .. } => "NetworkError",
            LookupError::ApiError { .. } => "ApiError",
            LookupError::UnexpectedError(_) => "UnexpectedError",
            LookupError::NotFound { .. } => "NotFound",
            LookupError::NoSpecs { .. } => "NoSpecs",
        }
    }
}

impl From<TransportError> for LookupError {
    fn from(e: TransportError) -> Self {
        LookupError::NetworkError { detail: e.to_string() }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        LookupError::UnexpectedError(e.to_string())
    }
}
