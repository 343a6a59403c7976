//! User CRUD.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::info;

use catalog_auth::password::PasswordHasher;
use catalog_auth::validation::UniquenessValidator;
use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_database::store::{RoleStore, UserStore};
use catalog_entity::user::{NewUser, RoleRef, User};

use super::request::{RoleId, UserInsertRequest, UserUpdateRequest, field_report};

/// Handles user management.
///
/// Every mutation is validated in full (field rules and email uniqueness)
/// before anything is written; the failures are reported together.
#[derive(Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Role reference data.
    roles: Arc<dyn RoleStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Email uniqueness checks.
    uniqueness: UniquenessValidator,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        roles: Arc<dyn RoleStore>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            uniqueness: UniquenessValidator::new(Arc::clone(&users)),
            users,
            roles,
            hasher,
        }
    }

    /// Lists every user ordered by id.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Gets a single user by id.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Id not found {id}")))
    }

    /// Creates a new user.
    pub async fn insert(&self, req: UserInsertRequest) -> AppResult<User> {
        let mut report = field_report(&req);
        report.merge(self.uniqueness.validate_for_insert(&req.email).await?);
        report.into_result()?;

        let roles = self.resolve_roles(&req.roles).await?;
        let password_hash = self.hasher.hash_secret(&req.password)?;

        let user = self
            .users
            .insert(NewUser {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
                roles,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "User created");
        Ok(user)
    }

    /// Replaces the profile and roles of the user addressed by `id`.
    ///
    /// The password is left untouched.
    pub async fn update(&self, id: i64, req: UserUpdateRequest) -> AppResult<User> {
        let mut report = field_report(&req);
        report.merge(self.uniqueness.validate_for_update(&req.email, id).await?);
        report.into_result()?;

        let mut user = self.get(id).await?;
        user.roles = self.resolve_roles(&req.roles).await?;
        user.first_name = req.first_name;
        user.last_name = req.last_name;
        user.email = req.email;

        let user = self.users.update(&user).await?;

        info!(user_id = user.id, "User updated");
        Ok(user)
    }

    /// Deletes a user.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.users.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn resolve_roles(&self, ids: &[RoleId]) -> AppResult<BTreeSet<RoleRef>> {
        let mut roles = BTreeSet::new();
        for RoleId { id } in ids {
            let role = self
                .roles
                .find_by_id(*id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Role not found {id}")))?;
            roles.insert(role);
        }
        Ok(roles)
    }
}
