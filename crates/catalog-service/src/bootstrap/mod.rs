//! Startup loading of reference data.

pub mod seed;

pub use seed::seed_credentials;
