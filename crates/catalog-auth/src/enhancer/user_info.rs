//! Publishes the user's id and first name as token claims.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::warn;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::store::UserStore;
use catalog_entity::user::User;

use super::TokenEnhancer;

/// Claim key holding the user's first name.
pub const USER_FIRST_NAME_CLAIM: &str = "userFirstName";
/// Claim key holding the user's numeric id.
pub const USER_ID_CLAIM: &str = "userId";

/// Re-reads the principal from the user store and emits
/// `userFirstName` and `userId`.
#[derive(Clone)]
pub struct UserInfoEnhancer {
    users: Arc<dyn UserStore>,
}

impl UserInfoEnhancer {
    /// Creates the enhancer over the given user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl TokenEnhancer for UserInfoEnhancer {
    fn name(&self) -> &'static str {
        "user_info"
    }

    async fn enhance(&self, principal: &User) -> AppResult<Map<String, Value>> {
        let user = self
            .users
            .find_by_email(&principal.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %principal.email, "Principal vanished during token issuance");
                AppError::principal_gone("Authenticated user no longer exists")
            })?;

        let mut claims = Map::new();
        claims.insert(
            USER_FIRST_NAME_CLAIM.to_string(),
            Value::String(user.first_name),
        );
        claims.insert(USER_ID_CLAIM.to_string(), Value::from(user.id));
        Ok(claims)
    }
}
