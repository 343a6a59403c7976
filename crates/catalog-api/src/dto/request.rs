//! Request DTOs.

use serde::Deserialize;

/// Form body of `POST /oauth/token`.
///
/// Client credentials are only read from the form when no HTTP Basic
/// `Authorization` header is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenForm {
    /// Grant type; only `password` is supported.
    #[serde(default)]
    pub grant_type: String,
    /// Resource owner login (email).
    #[serde(default)]
    pub username: String,
    /// Resource owner password.
    #[serde(default)]
    pub password: String,
    /// Space-delimited scopes.
    pub scope: Option<String>,
    /// Client id (form fallback).
    pub client_id: Option<String>,
    /// Client secret (form fallback).
    pub client_secret: Option<String>,
}

/// Query of `GET /oauth/check_token`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckTokenQuery {
    /// The token to introspect.
    pub token: String,
}
