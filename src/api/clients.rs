use actix_web::{web, HttpResponse, ResponseError};

use crate::api::metrics;
use crate::models::{ClientRecord, ClientRegistrationData};
use crate::store::ClientStore;
use crate::utils::error::RegistryError;
use crate::validation;

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "Clients",
    request_body = ClientRegistrationData,
    responses(
        (status = 201, description = "Client registered successfully", body = ClientRecord),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "Email or GSTIN already registered"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_client(
    store: web::Data<dyn ClientStore>,
    body: web::Json<ClientRegistrationData>,
) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("📋 POST /api/clients - Registering '{}'", body.company_name);

    // Reject malformed candidates before touching storage
    if let Err(err) = validation::validate(&body) {
        metrics::increment_error_count();
        log::warn!("⚠️ Registration rejected: {}", err);
        return err.error_response();
    }

    match store.append(body.into_inner()).await {
        Ok(client) => {
            metrics::increment_registered_count();
            log::info!("✅ Client registered: {} (id {})", client.company_name, client.id);
            HttpResponse::Created().json(serde_json::json!({
                "message": "Client registered successfully",
                "client": client
            }))
        }
        Err(err) if err.is_internal() => {
            metrics::increment_error_count();
            log::error!("❌ Failed to register client: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal Server Error",
                "message": "Failed to register client"
            }))
        }
        Err(err) => {
            metrics::increment_error_count();
            log::warn!("⚠️ Registration rejected: {}", err);
            err.error_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "Clients",
    responses(
        (status = 200, description = "All registered clients with total count"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_clients(store: web::Data<dyn ClientStore>) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("📋 GET /api/clients - Listing clients");

    match store.list().await {
        Ok(clients) => {
            log::info!("✅ {} clients returned", clients.len());
            HttpResponse::Ok().json(serde_json::json!({
                "clients": clients,
                "total": clients.len()
            }))
        }
        Err(err) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to fetch clients: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal Server Error",
                "message": "Failed to fetch clients"
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = "Clients",
    params(
        ("id" = String, Path, description = "Client identifier")
    ),
    responses(
        (status = 200, description = "Client found"),
        (status = 404, description = "No client with this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_client(
    store: web::Data<dyn ClientStore>,
    path: web::Path<String>,
) -> HttpResponse {
    metrics::increment_request_count();
    let id = path.into_inner();
    log::info!("📋 GET /api/clients/{} - Fetching client", id);

    match store.get_by_id(&id).await {
        Ok(Some(client)) => {
            log::info!("✅ Client {} found", id);
            HttpResponse::Ok().json(serde_json::json!({ "client": client }))
        }
        Ok(None) => {
            metrics::increment_error_count();
            log::warn!("⚠️ Client {} not found", id);
            RegistryError::NotFound.error_response()
        }
        Err(err) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to fetch client {}: {}", id, err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal Server Error",
                "message": "Failed to fetch client"
            }))
        }
    }
}
