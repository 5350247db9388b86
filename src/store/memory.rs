use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{ClientStore, Registry};
use crate::models::{ClientRecord, ClientRegistrationData};
use crate::utils::error::Result;

/// In-process registry with the same admission contract as the file store.
/// Selected with `DB_PATH=:memory:`; also serves as the test double.
#[derive(Default)]
pub struct MemoryStore {
    registry: Mutex<Registry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn append(&self, candidate: ClientRegistrationData) -> Result<ClientRecord> {
        let mut registry = self.registry.lock().await;
        registry.admit_client(candidate, Utc::now())
    }

    async fn list(&self) -> Result<Vec<ClientRecord>> {
        Ok(self.registry.lock().await.clients.clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ClientRecord>> {
        let registry = self.registry.lock().await;
        Ok(registry
            .clients
            .iter()
            .find(|client| client.id == id)
            .cloned())
    }
}
