//! Content service error types.

use thiserror::Error;

/// Content service error variants.
///
/// Callers only distinguish success from failure; the variant is for logs.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ContentError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("content service returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("content service returned no usable content: {reason}")]
    EmptyResponse { reason: String },

    #[error("malformed content payload: {message}")]
    Malformed { message: String },

    #[error("content failed validation: {field} {problem}")]
    Invalid { field: String, problem: String },

    #[error("no API key configured (looked in {env_var})")]
    MissingApiKey { env_var: String },

    #[error("unexpected content error: {message}")]
    Unexpected { message: String },
}

impl ContentError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates empty response error.
    #[must_use]
    pub fn empty(reason: impl Into<String>) -> Self {
        Self::EmptyResponse {
            reason: reason.into(),
        }
    }

    /// Creates malformed payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates validation error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            problem: problem.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
