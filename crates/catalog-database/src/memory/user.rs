//! In-memory user table with a unique email index.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::user::{NewUser, User};

use crate::store::UserStore;

/// Rows plus the email index, guarded together so that the uniqueness
/// check and the write happen under one lock.
#[derive(Debug, Default)]
struct UserTable {
    rows: BTreeMap<i64, User>,
    by_email: HashMap<String, i64>,
    next_id: i64,
}

/// Lock-guarded in-memory [`UserStore`].
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    table: RwLock<UserTable>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .by_email
            .get(&email_key(email))
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        let key = email_key(&user.email);
        if table.by_email.contains_key(&key) {
            return Err(AppError::conflict(format!(
                "Integrity violation: email '{}' already exists",
                user.email
            )));
        }

        table.next_id += 1;
        let id = table.next_id;
        let user = user.with_id(id);
        table.by_email.insert(key, id);
        table.rows.insert(id, user.clone());

        debug!(user_id = id, "User row inserted");
        Ok(user)
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        let mut table = self.table.write().await;
        let previous_key = match table.rows.get(&user.id) {
            Some(existing) => email_key(&existing.email),
            None => return Err(AppError::not_found(format!("Id not found {}", user.id))),
        };

        let key = email_key(&user.email);
        if let Some(owner) = table.by_email.get(&key) {
            if *owner != user.id {
                return Err(AppError::conflict(format!(
                    "Integrity violation: email '{}' already exists",
                    user.email
                )));
            }
        }

        table.by_email.remove(&previous_key);
        table.by_email.insert(key, user.id);
        table.rows.insert(user.id, user.clone());

        debug!(user_id = user.id, "User row updated");
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        let removed = table
            .rows
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Id not found {id}")))?;
        table.by_email.remove(&email_key(&removed.email));

        debug!(user_id = id, "User row deleted");
        Ok(())
    }
}
