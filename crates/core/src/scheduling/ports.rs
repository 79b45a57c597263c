//! Port interfaces for the external suggestion service

use async_trait::async_trait;
use timeflow_domain::{SchedulingInput, TimeSuggestion};

/// Failure modes of one external suggestion call.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// The service returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {0}s)")]
    RateLimit(u64),

    /// Authentication failed (invalid API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Response body doesn't match the required output shape
    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),

    /// Request timeout
    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),
}

/// One logical request/response exchange with the generative-model service.
///
/// Implementations send a single request per call; retry and coalescing are
/// deliberately out of scope - a failed call is reported, not repeated.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Request an optimal-time suggestion for the given input.
    async fn suggest(&self, input: SchedulingInput) -> Result<TimeSuggestion, ProviderError>;
}
