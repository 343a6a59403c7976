//! Token issuance and client registration configuration.

use serde::{Deserialize, Serialize};

/// Authentication and token configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Value of the `iss` claim; verified on decode.
    #[serde(default = "default_jwt_issuer")]
    pub jwt_issuer: String,
    /// Clock skew tolerated when checking `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub jwt_leeway_seconds: u64,
    /// Registered API clients.
    #[serde(default = "default_clients")]
    pub clients: Vec<ClientConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_issuer: default_jwt_issuer(),
            jwt_leeway_seconds: default_leeway(),
            clients: default_clients(),
        }
    }
}

/// One registered API client.
///
/// The secret is given in plaintext here and hashed when the client is
/// registered with the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Public client identifier.
    pub client_id: String,
    /// Plaintext client secret.
    pub client_secret: String,
    /// Grant types this client may use.
    #[serde(default = "default_grants")]
    pub grant_types: Vec<String>,
    /// Scopes this client may request.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
    /// Lifetime of issued access tokens in seconds.
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime_seconds: u64,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_jwt_issuer() -> String {
    "catalog".to_string()
}

fn default_leeway() -> u64 {
    5
}

fn default_clients() -> Vec<ClientConfig> {
    vec![ClientConfig {
        client_id: "catalog-app".to_string(),
        client_secret: "catalog-secret".to_string(),
        grant_types: default_grants(),
        scopes: default_scopes(),
        token_lifetime_seconds: default_token_lifetime(),
    }]
}

fn default_grants() -> Vec<String> {
    vec!["password".to_string()]
}

fn default_scopes() -> Vec<String> {
    vec!["read".to_string(), "write".to_string()]
}

fn default_token_lifetime() -> u64 {
    86400
}
