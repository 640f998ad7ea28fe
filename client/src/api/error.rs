// Error types for API client operations

use thiserror::Error;

/// Error type for API client operations
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// Error from the reqwest HTTP client
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Error parsing JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The service answered with a non-success status
    #[error("API error: {0}")]
    ApiError(String),

    /// The response body did not match the expected shape
    #[error("Response error: {0}")]
    ResponseError(String),
}
