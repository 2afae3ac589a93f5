//! Domain value types for the remote user directory.

#![forbid(unsafe_code)]

mod page;
mod user;

pub use page::{Pagination, UserPage};
pub use user::UserRecord;
