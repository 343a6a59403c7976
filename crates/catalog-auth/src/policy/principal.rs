//! The verified caller identity.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An authenticated caller as recovered from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user's email (token subject).
    pub email: String,
    /// The user's id, when the token carries one.
    pub user_id: Option<i64>,
    /// Role authorities, e.g. `ROLE_ADMIN`.
    pub authorities: BTreeSet<String>,
}

impl Principal {
    /// Check if the caller holds at least one of the given authorities.
    pub fn has_any_authority(&self, required: &BTreeSet<String>) -> bool {
        !self.authorities.is_disjoint(required)
    }
}
