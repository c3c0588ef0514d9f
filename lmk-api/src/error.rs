//! Error types for the LMK API client.
//!
//! Only local failures are errors. A non-2xx response with a JSON body is
//! handed back to the caller as a normal value, and a failed login is
//! signalled by the missing `id` in the returned body.

use thiserror::Error;

/// Errors that can occur when talking to the LMK API.
#[derive(Debug, Error)]
pub enum LmkError {
    /// HTTP transport error (DNS, connection refused, timeout, TLS failure).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A JSON endpoint answered with a body that is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A device id longer than the alphabet was requested. Characters are
    /// drawn without replacement, so at most `max` of them are available.
    #[error("device id length {requested} exceeds alphabet size {max}")]
    DeviceIdLength {
        /// Requested id length.
        requested: usize,
        /// Number of distinct characters in the alphabet.
        max: usize,
    },

    /// Failure reported by a custom [`Transport`](crate::Transport).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Convenience alias for `Result<T, LmkError>`.
pub type Result<T> = std::result::Result<T, LmkError>;
