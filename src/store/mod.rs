//! Client registry storage. The entire registry lives in one JSON document
//! (`{ clients, users }`) that is read in full before every operation and
//! rewritten in full after every mutation; there is no incremental format.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ClientRecord, ClientRegistrationData, User};
use crate::utils::error::{RegistryError, Result};
use crate::validation;

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Top-level layout of the persisted document
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Registry {
    pub clients: Vec<ClientRecord>,
    pub users: Vec<User>,
}

impl Registry {
    /// Admits a candidate: validates it, rejects email/GSTIN duplicates,
    /// assigns the id and registration date from `now`, and appends the
    /// record. The caller decides when (and whether) the result is durable.
    pub fn admit_client(
        &mut self,
        candidate: ClientRegistrationData,
        now: DateTime<Utc>,
    ) -> Result<ClientRecord> {
        validation::validate(&candidate)?;

        let duplicate = self.clients.iter().any(|existing| {
            existing.email == candidate.email || existing.gstin == candidate.gstin
        });
        if duplicate {
            return Err(RegistryError::DuplicateClient);
        }

        let record = ClientRecord {
            id: self.next_client_id(now.timestamp_millis()),
            company_name: candidate.company_name,
            contact_name: candidate.contact_name,
            email: candidate.email,
            phone: candidate.phone,
            gstin: candidate.gstin,
            client_type: candidate.client_type,
            address: candidate.address,
            city: candidate.city,
            state: candidate.state,
            pincode: candidate.pincode,
            registration_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: "Active".to_string(),
        };
        self.clients.push(record.clone());
        Ok(record)
    }

    /// Epoch-millisecond id as a string, bumped past any value already taken
    /// so two admissions in the same millisecond cannot collide
    fn next_client_id(&self, creation_ms: i64) -> String {
        let mut candidate = creation_ms;
        loop {
            let id = candidate.to_string();
            if !self.clients.iter().any(|client| client.id == id) {
                return id;
            }
            candidate += 1;
        }
    }
}

/// Abstract interface for client registry storage.
/// Implementations serialize mutations internally; callers never lock.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Validate and admit a candidate, returning the stored record
    async fn append(&self, candidate: ClientRegistrationData) -> Result<ClientRecord>;

    /// All clients in insertion order
    async fn list(&self) -> Result<Vec<ClientRecord>>;

    /// Look up a single client; `Ok(None)` when the id is unknown
    async fn get_by_id(&self, id: &str) -> Result<Option<ClientRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn candidate(email: &str, gstin: &str) -> ClientRegistrationData {
        ClientRegistrationData {
            company_name: "Acme Exports".to_string(),
            contact_name: "Priya Sharma".to_string(),
            email: email.to_string(),
            phone: "+91 98200 12345".to_string(),
            gstin: gstin.to_string(),
            client_type: "exporter".to_string(),
            address: "12 Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
        }
    }

    #[test]
    fn test_admit_assigns_id_date_and_status() {
        let mut registry = Registry::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 10, 30, 0).unwrap();

        let record = registry
            .admit_client(candidate("priya@acmeexports.in", "27AAPFU0939F1ZV"), now)
            .unwrap();

        assert_eq!(record.id, now.timestamp_millis().to_string());
        assert_eq!(record.registration_date, "2026-03-05T10:30:00.000Z");
        assert_eq!(record.status, "Active");
        assert_eq!(record.company_name, "Acme Exports");
        assert_eq!(registry.clients.len(), 1);
        assert_eq!(registry.clients[0], record);
    }

    #[test]
    fn test_admit_same_millisecond_bumps_id() {
        let mut registry = Registry::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 10, 30, 0).unwrap();

        let first = registry
            .admit_client(candidate("a@acme.in", "27AAPFU0939F1ZV"), now)
            .unwrap();
        let second = registry
            .admit_client(candidate("b@acme.in", "07AABCS1234A1Z5"), now)
            .unwrap();

        let base = now.timestamp_millis();
        assert_eq!(first.id, base.to_string());
        assert_eq!(second.id, (base + 1).to_string());
    }

    #[test]
    fn test_admit_rejects_duplicate_email() {
        let mut registry = Registry::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 10, 30, 0).unwrap();
        registry
            .admit_client(candidate("priya@acmeexports.in", "27AAPFU0939F1ZV"), now)
            .unwrap();

        let err = registry
            .admit_client(candidate("priya@acmeexports.in", "07AABCS1234A1Z5"), now)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateClient));
        assert_eq!(registry.clients.len(), 1);
    }

    #[test]
    fn test_admit_rejects_duplicate_gstin() {
        let mut registry = Registry::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 10, 30, 0).unwrap();
        registry
            .admit_client(candidate("priya@acmeexports.in", "27AAPFU0939F1ZV"), now)
            .unwrap();

        let err = registry
            .admit_client(candidate("other@acme.in", "27AAPFU0939F1ZV"), now)
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateClient));
        assert_eq!(registry.clients.len(), 1);
    }

    #[test]
    fn test_admit_validates_before_touching_clients() {
        let mut registry = Registry::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 10, 30, 0).unwrap();

        let err = registry
            .admit_client(candidate("", "27AAPFU0939F1ZV"), now)
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingFields(_)));
        assert!(registry.clients.is_empty());
    }

    #[test]
    fn test_document_parses_with_missing_collections() {
        let registry: Registry = serde_json::from_str("{}").unwrap();
        assert!(registry.clients.is_empty());
        assert!(registry.users.is_empty());

        let registry: Registry = serde_json::from_str(r#"{"clients": []}"#).unwrap();
        assert!(registry.users.is_empty());
    }
}
