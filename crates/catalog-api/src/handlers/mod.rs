//! Route handlers organized by domain.

pub mod health;
pub mod token;
pub mod user;
