//! Error types for seo-score.
//!
//! This module defines the error types returned by fetch, analysis and
//! export operations.

/// Error type for SEO analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The given URL is not an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the body could not be read.
    #[error("Error fetching the URL: {0}")]
    Fetch(String),

    /// The server answered with a client or server error status.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: u16,
        /// URL that produced the status (after redirects).
        url: String,
    },

    /// Writing an export file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the report failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            };
        }
        Self::Fetch(err.to_string())
    }
}

/// Result type alias for SEO analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
