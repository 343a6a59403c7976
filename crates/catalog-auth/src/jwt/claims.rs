//! JWT claims structure carried by every access token.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::enhancer::{USER_FIRST_NAME_CLAIM, USER_ID_CLAIM};
use crate::policy::Principal;

/// Claim names owned by the issuer; enhancers may not overwrite them.
pub const RESERVED_CLAIMS: &[&str] = &[
    "sub",
    "iss",
    "iat",
    "exp",
    "jti",
    "client_id",
    "scope",
    "authorities",
];

/// JWT claims payload embedded in every access token.
///
/// Enhancer output is flattened into the payload next to the standard
/// claims. Unknown claims found while decoding land in `extra` and are
/// otherwise ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email.
    pub sub: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token id.
    pub jti: Uuid,
    /// Client the token was issued to.
    pub client_id: String,
    /// Granted scopes.
    #[serde(default)]
    pub scope: Vec<String>,
    /// Role authorities of the user at issuance time.
    #[serde(default)]
    pub authorities: Vec<String>,
    /// Enhancer-provided claims.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// The `userId` claim, when present and numeric.
    pub fn user_id(&self) -> Option<i64> {
        self.extra.get(USER_ID_CLAIM).and_then(Value::as_i64)
    }

    /// The `userFirstName` claim, when present.
    pub fn user_first_name(&self) -> Option<&str> {
        self.extra.get(USER_FIRST_NAME_CLAIM).and_then(Value::as_str)
    }

    /// The authenticated identity this token speaks for.
    pub fn principal(&self) -> Principal {
        Principal {
            email: self.sub.clone(),
            user_id: self.user_id(),
            authorities: self.authorities.iter().cloned().collect::<BTreeSet<_>>(),
        }
    }
}
