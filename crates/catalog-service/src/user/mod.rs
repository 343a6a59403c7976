//! User management.

pub mod request;
pub mod service;

pub use request::{RoleId, UserInsertRequest, UserUpdateRequest};
pub use service::UserService;
