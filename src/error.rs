//! Error types for the lead-capture flow.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//!
//! Note the taxonomy has no variant for a server-side rejection: the form
//! endpoint is called fire-and-forget (the browser original used an opaque
//! `no-cors` request), so the server's verdict is unobservable by design.

use thiserror::Error;

/// Errors that can occur when dispatching a lead to the Mautic form endpoint.
///
/// Every variant is a local, transport-level failure. An HTTP error status
/// from the server is NOT represented here; it still counts as a dispatched
/// submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Could not reach the endpoint at all
    #[error("Connection failed")]
    ConnectionFailed,

    /// Request timed out locally
    #[error("Request timeout")]
    Timeout,

    /// Other transport-level failure (DNS, TLS, interrupted task)
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with SubmitError
pub type SubmitResult<T> = Result<T, SubmitError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubmitError::Transport("dns failure".to_string());
        assert_eq!(err.to_string(), "Transport error: dns failure");

        let err = SubmitError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::MissingVar("MAUTIC_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: MAUTIC_BASE_URL"
        );
    }
}
