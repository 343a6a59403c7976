//! # catalog-auth
//!
//! Authentication and authorization core for the catalog API.
//!
//! ## Modules
//!
//! - `password` — Argon2id hashing and verification for passwords and client secrets
//! - `jwt` — claims structure, token signing, and token verification
//! - `enhancer` — claim producers merged into issued tokens
//! - `token` — resource-owner password grant token issuance
//! - `policy` — ordered method/path rule table deciding allow or deny
//! - `validation` — email uniqueness checks for user insert and update

pub mod enhancer;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod token;
pub mod validation;

pub use enhancer::{EnhancerChain, TokenEnhancer, UserInfoEnhancer};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use policy::{Access, AccessPolicy, AccessRule, Decision, DenyReason, PathPattern, Principal};
pub use token::{IssuedToken, TokenIssuer, TokenRequest};
pub use validation::UniquenessValidator;
