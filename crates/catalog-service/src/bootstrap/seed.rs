//! Loads clients, roles and users from configuration into the stores.

use std::collections::BTreeSet;

use tracing::info;

use catalog_auth::password::PasswordHasher;
use catalog_core::config::AppConfig;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::store::{ClientStore, RoleStore, UserStore};
use catalog_entity::client::Client;
use catalog_entity::user::{NewUser, RoleRef};

/// Registers configured clients and seeds roles and users.
///
/// Plaintext client secrets and user passwords from the configuration are
/// hashed before they reach the stores. A seed user referencing an unknown
/// role id is a configuration error.
pub async fn seed_credentials(
    config: &AppConfig,
    clients: &dyn ClientStore,
    roles: &dyn RoleStore,
    users: &dyn UserStore,
    hasher: &PasswordHasher,
) -> AppResult<()> {
    for client in &config.auth.clients {
        clients
            .register(Client {
                client_id: client.client_id.clone(),
                secret_hash: hasher.hash_secret(&client.client_secret)?,
                allowed_grants: client.grant_types.iter().cloned().collect(),
                scopes: client.scopes.iter().cloned().collect(),
                token_lifetime_seconds: client.token_lifetime_seconds,
            })
            .await?;
    }

    for role in &config.seed.roles {
        roles.insert(RoleRef::new(role.id, &role.authority)).await?;
    }

    for seed in &config.seed.users {
        let mut granted = BTreeSet::new();
        for id in &seed.roles {
            let role = roles.find_by_id(*id).await?.ok_or_else(|| {
                AppError::configuration(format!(
                    "Seed user '{}' references unknown role {id}",
                    seed.email
                ))
            })?;
            granted.insert(role);
        }

        users
            .insert(NewUser {
                first_name: seed.first_name.clone(),
                last_name: seed.last_name.clone(),
                email: seed.email.clone(),
                password_hash: hasher.hash_secret(&seed.password)?,
                roles: granted,
            })
            .await?;
    }

    info!(
        clients = config.auth.clients.len(),
        roles = config.seed.roles.len(),
        users = config.seed.users.len(),
        "Credential store seeded"
    );

    Ok(())
}
