//! Error types for the price catalog tools.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or writing the price catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport error (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Pricing API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// Malformed JSON or missing field
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Items priced in more than one currency
    #[error("Currency code mismatch: expected {expected}, found {found} for {region}/{sku}")]
    CurrencyMismatch {
        expected: String,
        found: String,
        region: String,
        sku: String,
    },

    /// Output file error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
