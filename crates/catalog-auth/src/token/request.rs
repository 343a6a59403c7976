//! Token request and response types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A password-grant token request with the client already identified.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenRequest {
    /// Public client identifier.
    pub client_id: String,
    /// Plaintext client secret.
    pub client_secret: String,
    /// Requested grant type; only `password` is supported.
    pub grant_type: String,
    /// Resource owner login (email).
    pub username: String,
    /// Resource owner password.
    pub password: String,
    /// Requested scopes; empty means every scope of the client.
    #[serde(default)]
    pub scope: Vec<String>,
}

impl TokenRequest {
    /// Splits a space-delimited `scope` parameter.
    pub fn parse_scope(raw: Option<&str>) -> Vec<String> {
        raw.map(|s| s.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

/// A successfully issued access token.
///
/// Serializes to the OAuth2 token response with the enhancer claims
/// alongside the standard fields.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    /// Signed JWT.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Seconds until expiry.
    pub expires_in: u64,
    /// Granted scopes, space-delimited.
    pub scope: String,
    /// Token id.
    pub jti: Uuid,
    /// Enhancer claims, also embedded in the token.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
