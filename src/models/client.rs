use serde::{Deserialize, Serialize};

/// Registered customs client (persisted in the JSON document store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Server-assigned identifier (epoch milliseconds of creation, as a string)
    pub id: String,

    /// Legal company name
    pub company_name: String,

    /// Primary contact person
    pub contact_name: String,

    /// Contact email (unique across the registry)
    pub email: String,

    /// Contact phone number; older documents may omit this key entirely
    #[serde(default)]
    pub phone: String,

    /// Goods and Services Tax Identification Number, 15 characters (unique)
    pub gstin: String,

    /// Trade profile as submitted; see [`ClientType`] for classification
    pub client_type: String,

    /// Street address
    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub state: String,

    /// Postal code
    #[serde(default)]
    pub pincode: String,

    /// ISO-8601 timestamp assigned at registration
    pub registration_date: String,

    /// Fixed to "Active" at creation; no lifecycle transitions exist
    pub status: String,
}

/// Request to register a client. Every field defaults to empty so an absent
/// key and an empty string are reported the same way by validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientRegistrationData {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub gstin: String,
    pub client_type: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

/// Closed classification over the free-form `clientType` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientType {
    Exporter,
    Importer,
    Both,
    /// Unrecognized value; counted in client totals but in no trade bucket
    Unspecified,
}

impl ClientType {
    /// Exact, case-sensitive match. Records written by other tooling may
    /// carry arbitrary strings and must still classify somewhere.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "exporter" => ClientType::Exporter,
            "importer" => ClientType::Importer,
            "both" => ClientType::Both,
            _ => ClientType::Unspecified,
        }
    }
}
