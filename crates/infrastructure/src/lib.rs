//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod reqwest_user_api_transport;

pub use reqwest_user_api_transport::ReqwestUserApiTransport;
