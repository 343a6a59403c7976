//! In-memory role table.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::user::RoleRef;

use crate::store::RoleStore;

/// Lock-guarded in-memory [`RoleStore`].
#[derive(Debug, Default)]
pub struct MemoryRoleStore {
    roles: RwLock<BTreeMap<i64, RoleRef>>,
}

impl MemoryRoleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<RoleRef>> {
        Ok(self.roles.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<RoleRef>> {
        Ok(self.roles.read().await.values().cloned().collect())
    }

    async fn insert(&self, role: RoleRef) -> AppResult<RoleRef> {
        let mut roles = self.roles.write().await;
        if roles.contains_key(&role.id) {
            return Err(AppError::conflict(format!(
                "Role id {} already exists",
                role.id
            )));
        }
        roles.insert(role.id, role.clone());
        Ok(role)
    }
}
