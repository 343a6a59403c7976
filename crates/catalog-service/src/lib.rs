//! # catalog-service
//!
//! Application services on top of the credential store: user management
//! gated by field and uniqueness validation, and the startup seeding of
//! clients, roles and users.
//!
//! Services follow constructor injection; every dependency is handed in
//! as an `Arc` at construction time.

pub mod bootstrap;
pub mod user;

pub use bootstrap::seed_credentials;
pub use user::{RoleId, UserInsertRequest, UserService, UserUpdateRequest};
