//! In-memory credential store.

pub mod client;
pub mod role;
pub mod user;

pub use client::MemoryClientStore;
pub use role::MemoryRoleStore;
pub use user::MemoryUserStore;
