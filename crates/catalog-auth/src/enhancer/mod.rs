//! Claim producers merged into issued tokens.
//!
//! Each [`TokenEnhancer`] looks at the authenticated user and returns a map
//! of extra claims. An [`EnhancerChain`] runs its enhancers in order and
//! merges their output left to right, so new claims can be added without
//! touching the issuer.

pub mod chain;
pub mod user_info;

use async_trait::async_trait;
use serde_json::{Map, Value};

use catalog_core::result::AppResult;
use catalog_entity::user::User;

pub use chain::EnhancerChain;
pub use user_info::{USER_FIRST_NAME_CLAIM, USER_ID_CLAIM, UserInfoEnhancer};

/// Produces extra claims for an authenticated principal.
#[async_trait]
pub trait TokenEnhancer: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the claims to merge into the token.
    ///
    /// Fails with `PrincipalGone` when the principal can no longer be
    /// resolved; issuance then aborts.
    async fn enhance(&self, principal: &User) -> AppResult<Map<String, Value>>;
}
