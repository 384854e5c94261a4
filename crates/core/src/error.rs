//! Error types for the VyomNetra domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum; none of them ever reach
//! the HTTP caller. Fetch and provider errors are turned into fallback
//! text at the component boundary where they occur.

use thiserror::Error;

/// The top-level error type for all VyomNetra operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Live data source errors ---
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    // --- Generative model errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failure of a single live data fetch.
///
/// Every variant is an expected outcome: the caller substitutes a fact
/// from the source's fallback pool.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Upstream returned status {status_code}")]
    Status { status_code: u16 },

    #[error("Unexpected response shape: {0}")]
    Parse(String),

    #[error("Upstream returned no usable data: {0}")]
    Empty(String),
}

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Model returned no text")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_status() {
        let err = Error::Fetch(FetchError::Status { status_code: 503 });
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn provider_error_displays_correctly() {
        let err = Error::Provider(ProviderError::ApiError {
            status_code: 400,
            message: "API key not valid".into(),
        });
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("API key not valid"));
    }

    #[test]
    fn timeout_names_the_bound() {
        let err = FetchError::Timeout { timeout_secs: 10 };
        assert_eq!(err.to_string(), "Request timed out after 10s");
    }
}
