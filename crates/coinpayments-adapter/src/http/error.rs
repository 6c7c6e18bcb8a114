/*
[INPUT]:  Error sources (transport, serialization, URL, header, signing)
[OUTPUT]: Structured error type for every fallible client operation
[POS]:    Error handling layer - unified error type for the adapter crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the CoinPayments adapter
///
/// HTTP error statuses are not represented here: they come back as
/// [`ApiResponse::HttpError`](crate::types::ApiResponse::HttpError).
#[derive(Error, Debug)]
pub enum CoinPaymentsError {
    /// Transport failure (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Successful response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Endpoint URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Signature could not be placed in a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// HMAC could not be keyed
    #[error("Signature error: {0}")]
    Signature(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoinPaymentsError {
    /// Check if the error came from the transport layer
    pub fn is_transport(&self) -> bool {
        matches!(self, CoinPaymentsError::Http(_))
    }

    /// Check if the error is a timeout reported by the transport
    pub fn is_timeout(&self) -> bool {
        match self {
            CoinPaymentsError::Http(err) => err.is_timeout(),
            _ => false,
        }
    }
}

/// Result type alias for CoinPayments operations
pub type Result<T> = std::result::Result<T, CoinPaymentsError>;
