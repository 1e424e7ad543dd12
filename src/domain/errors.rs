use thiserror::Error;

/// Errors produced by the relay's payment and webhook flows.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Bad or missing caller input, rejected before any outbound call
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Referenced order does not exist on the commerce platform
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Payload could not be serialized for signing
    #[error("Encoding error: {0}")]
    EncodingError(#[from] serde_json::Error),

    /// Downstream API reported a failure
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    /// Outbound HTTP call failed or timed out
    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),
}

/// Result type for the relay's domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;
