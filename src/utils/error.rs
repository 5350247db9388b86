use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Everything the registration core can fail with. Client-facing variants
/// render the `{error, message}` wire pair with their mapped status code;
/// storage variants are surfaced by handlers as per-endpoint 500 bodies.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("GSTIN must be 15 characters long")]
    InvalidGstin,

    #[error("Client with this email or GSTIN already exists")]
    DuplicateClient,

    #[error("Client not found")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    /// True for failures the caller cannot correct (I/O, corrupt document)
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            RegistryError::Io(_) | RegistryError::Serialization(_)
        )
    }
}

impl ResponseError for RegistryError {
    fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::MissingFields(_)
            | RegistryError::InvalidEmail
            | RegistryError::InvalidGstin => StatusCode::BAD_REQUEST,
            RegistryError::DuplicateClient => StatusCode::CONFLICT,
            RegistryError::NotFound => StatusCode::NOT_FOUND,
            RegistryError::Io(_) | RegistryError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            RegistryError::MissingFields(missing) => serde_json::json!({
                "error": "Validation Error",
                "message": "Missing required fields",
                "missing": missing
            }),
            RegistryError::InvalidEmail => serde_json::json!({
                "error": "Invalid Email",
                "message": "Please enter a valid email address"
            }),
            RegistryError::InvalidGstin => serde_json::json!({
                "error": "Invalid GSTIN",
                "message": "GSTIN must be 15 characters long"
            }),
            RegistryError::DuplicateClient => serde_json::json!({
                "error": "Client Exists",
                "message": "Client with this email or GSTIN already exists"
            }),
            RegistryError::NotFound => serde_json::json!({
                "error": "Not Found",
                "message": "Client not found"
            }),
            RegistryError::Io(_) | RegistryError::Serialization(_) => serde_json::json!({
                "error": "Internal Server Error",
                "message": "Internal server error"
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
