//! User directory application service.
//!
//! Wraps the remote user API behind three single-shot operations. Every
//! response body is validated before a typed value is returned, and every
//! transport failure is translated into an [`AppError`].

use std::sync::Arc;

use tracing::warn;
use userlink_core::AppError;

use crate::{TransportError, TransportResponse, UserApiTransport};

mod listing;
mod payload;
mod registration;
mod retrieval;

/// Application service for reading and creating remote users.
#[derive(Clone)]
pub struct UserService {
    transport: Arc<dyn UserApiTransport>,
}

impl UserService {
    /// Creates a new user service over the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn UserApiTransport>) -> Self {
        Self { transport }
    }
}

/// Rejects responses that carry a non-2xx status even though the transport
/// returned them as successes.
fn ensure_success(response: TransportResponse) -> Result<TransportResponse, TransportError> {
    if response.status.is_success() {
        return Ok(response);
    }

    Err(TransportError::from_status(response.status, response.body))
}

fn request_failed(operation: &'static str, error: &TransportError) -> AppError {
    warn!(operation, error = %error, "user api request failed");
    AppError::RequestFailed(error.to_string())
}
