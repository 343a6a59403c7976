//! Credential store capabilities.
//!
//! Components receive these as `Arc<dyn ...>` so the backing storage can be
//! swapped without touching the issuer, the validator or the services.

use async_trait::async_trait;

use catalog_core::result::AppResult;
use catalog_entity::client::Client;
use catalog_entity::user::{NewUser, RoleRef, User};

/// User lookup and persistence.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List every user ordered by id.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert a new user and return it with its assigned id.
    ///
    /// Fails with `Conflict` when the email is already taken.
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Replace an existing user.
    ///
    /// Fails with `NotFound` for an unknown id and `Conflict` when the new
    /// email belongs to another user.
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Delete a user. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Role reference data lookup.
#[async_trait]
pub trait RoleStore: Send + Sync + 'static {
    /// Find a role by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<RoleRef>>;

    /// List every role ordered by id.
    async fn find_all(&self) -> AppResult<Vec<RoleRef>>;

    /// Register a role. Fails with `Conflict` for a duplicate id.
    async fn insert(&self, role: RoleRef) -> AppResult<RoleRef>;
}

/// Registered API client lookup.
#[async_trait]
pub trait ClientStore: Send + Sync + 'static {
    /// Find a client by its public identifier.
    async fn find_by_client_id(&self, client_id: &str) -> AppResult<Option<Client>>;

    /// Register a client. Fails with `Conflict` for a duplicate client id.
    async fn register(&self, client: Client) -> AppResult<()>;
}
