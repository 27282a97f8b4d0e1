//! Content service errors.

use thiserror::Error;

/// Errors that can occur when fetching storefront content.
#[derive(Debug, Error)]
pub enum ContentServiceError {
    /// An HTTP transport or deserialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response from commerce API: {0}")]
    UnexpectedResponse(String),
}
