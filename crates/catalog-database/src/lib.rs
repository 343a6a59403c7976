//! # catalog-database
//!
//! The credential store the security core talks to. The [`store`] module
//! defines the lookup/save capabilities as traits; [`memory`] implements
//! them with lock-guarded maps and enforces the unique email constraint
//! at the storage layer.

pub mod memory;
pub mod store;

pub use memory::{MemoryClientStore, MemoryRoleStore, MemoryUserStore};
pub use store::{ClientStore, RoleStore, UserStore};
