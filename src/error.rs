use thiserror::Error;

/// Errors a search collaborator can report for one suggestion fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Search failed with HTTP status {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Invalid search response: {0}")]
    Decode(String),

    /// Request was superseded or torn down before it finished
    #[error("Request cancelled")]
    Cancelled,
}

impl SearchError {
    /// Cancellation is routine and must not be reported as a failure
    pub fn is_cancellation(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            SearchError::Status(status.as_u16())
        } else {
            SearchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
