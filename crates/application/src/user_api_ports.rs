//! Port towards the HTTP transport that talks to the remote user API.

use std::fmt::{Display, Formatter};

use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Raw response handed back by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status line code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Undecoded response body.
    pub body: String,
}

impl TransportResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Transport-level failure: connection error, timeout or error status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    /// HTTP status, when the remote answered at all.
    pub status: Option<StatusCode>,
    /// Human readable failure description.
    pub message: String,
}

impl TransportError {
    /// Creates a failure for a response that carried an error status.
    #[must_use]
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Creates a failure where no response was received.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Returns whether the remote answered `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status == Some(StatusCode::NOT_FOUND)
    }
}

impl Display for TransportError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(formatter, "HTTP {status}: {}", self.message),
            None => write!(formatter, "{}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// HTTP transport bound to the base address of the remote user API.
///
/// Paths are relative to that base address. Implementations should report
/// non-2xx answers as [`TransportError`]; the service also treats any
/// non-2xx [`TransportResponse`] as a failure.
#[async_trait]
pub trait UserApiTransport: Send + Sync {
    /// Issues a `GET` for the relative path.
    async fn get(&self, path: &str) -> Result<TransportResponse, TransportError>;

    /// Issues a `POST` for the relative path with a JSON body.
    async fn post(&self, path: &str, body: &Value) -> Result<TransportResponse, TransportError>;
}
