//! Password-grant token issuance.

pub mod issuer;
pub mod request;

pub use issuer::TokenIssuer;
pub use request::{IssuedToken, TokenRequest};
