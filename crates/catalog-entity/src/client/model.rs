//! API client model.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The resource-owner password credentials grant, the only supported one.
pub const PASSWORD_GRANT: &str = "password";

/// An API client allowed to request tokens.
///
/// Immutable once registered; looked up by `client_id` during issuance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Public client identifier.
    pub client_id: String,
    /// Argon2 hash of the client secret.
    #[serde(skip_serializing)]
    pub secret_hash: String,
    /// Grant types this client may use.
    pub allowed_grants: BTreeSet<String>,
    /// Scopes this client may be granted.
    pub scopes: BTreeSet<String>,
    /// Lifetime of issued access tokens in seconds.
    pub token_lifetime_seconds: u64,
}

impl Client {
    /// Whether the client may use the given grant type.
    pub fn allows_grant(&self, grant_type: &str) -> bool {
        self.allowed_grants.contains(grant_type)
    }

    /// Scopes granted for a request.
    ///
    /// No requested scopes means every client scope; otherwise the
    /// intersection, which may be empty.
    pub fn grant_scopes(&self, requested: &[String]) -> BTreeSet<String> {
        if requested.is_empty() {
            return self.scopes.clone();
        }
        requested
            .iter()
            .filter(|s| self.scopes.contains(s.as_str()))
            .cloned()
            .collect()
    }
}
