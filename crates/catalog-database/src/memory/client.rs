//! In-memory client registry.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::client::Client;

use crate::store::ClientStore;

/// Lock-guarded in-memory [`ClientStore`].
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: RwLock<HashMap<String, Client>>,
}

impl MemoryClientStore {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn find_by_client_id(&self, client_id: &str) -> AppResult<Option<Client>> {
        Ok(self.clients.read().await.get(client_id).cloned())
    }

    async fn register(&self, client: Client) -> AppResult<()> {
        let mut clients = self.clients.write().await;
        if clients.contains_key(&client.client_id) {
            return Err(AppError::conflict(format!(
                "Client '{}' is already registered",
                client.client_id
            )));
        }
        clients.insert(client.client_id.clone(), client);
        Ok(())
    }
}
