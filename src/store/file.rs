use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{ClientStore, Registry};
use crate::models::{ClientRecord, ClientRegistrationData};
use crate::utils::error::Result;

/// File-backed registry. Each operation parses the whole document from disk;
/// each mutation rewrites it wholesale. The read-admit-write cycle runs
/// under one lock so concurrent registrations cannot lose an append.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens the store, creating parent directories and an empty document
    /// (`{ clients: [], users: [] }`) when the file does not exist yet.
    /// An existing document that fails to parse is reported per operation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            write_registry(&path, &Registry::default())?;
        }
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }
}

/// Reads the document, recreating it empty if it disappeared at runtime
fn read_registry(path: &Path) -> Result<Registry> {
    if !path.exists() {
        let registry = Registry::default();
        write_registry(path, &registry)?;
        return Ok(registry);
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_registry(path: &Path, registry: &Registry) -> Result<()> {
    let content = serde_json::to_string_pretty(registry)?;
    fs::write(path, content)?;
    Ok(())
}

#[async_trait]
impl ClientStore for JsonFileStore {
    async fn append(&self, candidate: ClientRegistrationData) -> Result<ClientRecord> {
        let _guard = self.lock.lock().await;
        let mut registry = read_registry(&self.path)?;
        let record = registry.admit_client(candidate, Utc::now())?;
        write_registry(&self.path, &registry)?;
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ClientRecord>> {
        let _guard = self.lock.lock().await;
        Ok(read_registry(&self.path)?.clients)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<ClientRecord>> {
        let _guard = self.lock.lock().await;
        let registry = read_registry(&self.path)?;
        Ok(registry.clients.into_iter().find(|client| client.id == id))
    }
}
