//! The token issuer.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use catalog_core::config::AuthConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::store::{ClientStore, UserStore};
use catalog_entity::client::PASSWORD_GRANT;

use super::request::{IssuedToken, TokenRequest};
use crate::enhancer::EnhancerChain;
use crate::jwt::claims::{Claims, RESERVED_CLAIMS};
use crate::jwt::encoder::JwtEncoder;
use crate::password::PasswordHasher;

/// Issues signed access tokens for the resource-owner password grant.
///
/// Stateless: nothing about an issued token is persisted, and every call
/// mints a fresh `jti`.
pub struct TokenIssuer {
    /// Expected `iss` claim value.
    issuer: String,
    /// Registered clients.
    clients: Arc<dyn ClientStore>,
    /// Resource owners.
    users: Arc<dyn UserStore>,
    /// Secret/password verification.
    hasher: Arc<PasswordHasher>,
    /// Token signing.
    encoder: Arc<JwtEncoder>,
    /// Extra claim producers.
    enhancers: EnhancerChain,
    /// Verified when the username is unknown so both paths cost the same.
    dummy_hash: String,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("enhancers", &self.enhancers)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Creates a new issuer.
    pub fn new(
        config: &AuthConfig,
        clients: Arc<dyn ClientStore>,
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        enhancers: EnhancerChain,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash_secret(&Uuid::new_v4().to_string())?;
        Ok(Self {
            issuer: config.jwt_issuer.clone(),
            clients,
            users,
            hasher,
            encoder,
            enhancers,
            dummy_hash,
        })
    }

    /// Authenticates client and resource owner, then signs an enhanced
    /// token.
    ///
    /// Checks run in a fixed order and the first failure wins: client,
    /// grant type, scope, user credentials, enhancement.
    pub async fn issue_token(&self, request: &TokenRequest) -> AppResult<IssuedToken> {
        let client = self.clients.find_by_client_id(&request.client_id).await?;
        let secret_ok = self.verify_or_dummy(
            &request.client_secret,
            client.as_ref().map(|c| c.secret_hash.as_str()),
        )?;
        let client = match client {
            Some(client) if secret_ok => client,
            _ => {
                warn!(client_id = %request.client_id, "Client authentication failed");
                return Err(AppError::invalid_client("Bad client credentials"));
            }
        };

        if request.grant_type != PASSWORD_GRANT || !client.allows_grant(&request.grant_type) {
            warn!(
                client_id = %client.client_id,
                grant_type = %request.grant_type,
                "Unsupported grant type"
            );
            return Err(AppError::unsupported_grant(format!(
                "Unsupported grant type: {}",
                request.grant_type
            )));
        }

        let granted = client.grant_scopes(&request.scope);
        if granted.is_empty() {
            warn!(
                client_id = %client.client_id,
                requested = ?request.scope,
                "No requested scope is allowed for client"
            );
            return Err(AppError::invalid_scope(format!(
                "Invalid scope: {}",
                request.scope.join(" ")
            )));
        }

        let user = self.users.find_by_email(&request.username).await?;
        let password_ok = self.verify_or_dummy(
            &request.password,
            user.as_ref().map(|u| u.password_hash.as_str()),
        )?;
        let user = match user {
            Some(user) if password_ok => user,
            _ => {
                warn!(
                    client_id = %client.client_id,
                    username = %request.username,
                    "Bad resource owner credentials"
                );
                return Err(AppError::invalid_credentials("Bad credentials"));
            }
        };

        let mut extra = self.enhancers.enhance(&user).await?;
        extra.retain(|key, _| {
            let reserved = RESERVED_CLAIMS.contains(&key.as_str());
            if reserved {
                warn!(claim = %key, "Enhancer claim collides with a standard claim, dropped");
            }
            !reserved
        });

        let now = Utc::now().timestamp();
        let lifetime = client.token_lifetime_seconds;
        let scope: Vec<String> = granted.into_iter().collect();
        let claims = Claims {
            sub: user.email.clone(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now.saturating_add(i64::try_from(lifetime).unwrap_or(i64::MAX)),
            jti: Uuid::new_v4(),
            client_id: client.client_id.clone(),
            scope: scope.clone(),
            authorities: user.authorities(),
            extra,
        };

        let access_token = self.encoder.encode(&claims)?;

        info!(
            client_id = %client.client_id,
            user_id = user.id,
            jti = %claims.jti,
            scope = %scope.join(" "),
            "Access token issued"
        );

        Ok(IssuedToken {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: lifetime,
            scope: scope.join(" "),
            jti: claims.jti,
            extra: claims.extra,
        })
    }

    /// Verifies `secret` against the stored hash, or against the dummy hash
    /// when nothing is stored. Known and unknown principals cost one Argon2
    /// verification each.
    fn verify_or_dummy(&self, secret: &str, stored: Option<&str>) -> AppResult<bool> {
        let matches = self
            .hasher
            .verify_secret(secret, stored.unwrap_or(&self.dummy_hash))?;
        Ok(stored.is_some() && matches)
    }
}
