//! Shared primitives for all Rust crates in Userlink.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Result type used across Userlink crates.
pub type AppResult<T> = Result<T, AppError>;

/// Error categories surfaced by the user API client.
///
/// A single service call fails with exactly one of `UserNotFound`,
/// `InvalidResponse` or `RequestFailed`. `Configuration` only appears while
/// wiring a process together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The remote API reported that the requested user does not exist.
    #[error("user {0} not found")]
    UserNotFound(i64),

    /// A successful response body did not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The transport failed for any reason other than a missing user.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Process configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn user_not_found_names_the_identifier() {
        assert_eq!(AppError::UserNotFound(9999).to_string(), "user 9999 not found");
    }

    #[test]
    fn invalid_response_keeps_the_reason() {
        let error = AppError::InvalidResponse("data missing".to_owned());
        assert_eq!(error.to_string(), "invalid response: data missing");
    }
}
