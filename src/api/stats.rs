use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::api::metrics;
use crate::services::stats_service::{self, DashboardStats};
use crate::store::ClientStore;

#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "Stats",
    responses(
        (status = 200, description = "Aggregate client statistics", body = DashboardStats),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_stats(store: web::Data<dyn ClientStore>) -> HttpResponse {
    metrics::increment_request_count();
    log::info!("📊 GET /api/stats - Computing dashboard statistics");

    match store.list().await {
        Ok(clients) => {
            let stats = stats_service::compute_stats(&clients, Local::now());
            log::info!("✅ Stats computed over {} clients", stats.total_clients);
            HttpResponse::Ok().json(stats)
        }
        Err(err) => {
            metrics::increment_error_count();
            log::error!("❌ Failed to compute stats: {}", err);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal Server Error",
                "message": "Failed to fetch statistics"
            }))
        }
    }
}
