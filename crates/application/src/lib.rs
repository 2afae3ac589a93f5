//! Application services and ports.

#![forbid(unsafe_code)]

mod user_api_ports;
mod user_service;

pub use user_api_ports::{TransportError, TransportResponse, UserApiTransport};
pub use user_service::UserService;
