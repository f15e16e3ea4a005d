//! Error taxonomy for backend HTTP calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes shared by auth, rest, and storage requests.
///
/// None of these are fatal. Auth errors surface on the sign-in form, rest
/// and storage errors surface as toasts on the page that issued the call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport-level failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status. `code` carries the backend's own error code
    /// (e.g. a Postgres SQLSTATE) when the body included one.
    #[error("{message}")]
    Http {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// Response body did not match the expected schema.
    #[error("malformed response: {0}")]
    Decode(String),

    /// Request was issued from a non-browser build.
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    /// True when the backend rejected an insert for violating a uniqueness
    /// constraint, e.g. applying to the same event twice.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, ApiError::Http { code: Some(code), .. } if code == "23505")
    }
}
