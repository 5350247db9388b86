mod api;
mod models;
mod services;
mod store;
mod utils;
mod validation;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::{ClientStore, JsonFileStore, MemoryStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());
    let db_path = env::var("DB_PATH").unwrap_or_else(|_| "db.json".to_string());

    log::info!("🚀 Starting CustomsBridge API...");

    // Select the storage backend once at startup
    let store: Arc<dyn ClientStore> = if db_path == ":memory:" {
        log::info!("📦 Storage: in-memory (registrations are not durable)");
        Arc::new(MemoryStore::new())
    } else {
        log::info!("📦 Storage: {}", db_path);
        Arc::new(JsonFileStore::open(&db_path).expect("Failed to initialize client registry"))
    };
    let store_data: web::Data<dyn ClientStore> = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);
    log::info!("🩺 Health check: http://{}:{}/api/health", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The registration frontend runs on its own dev server, so requests
        // are cross-origin by default
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check
            .route("/api/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Client registry
            .service(
                web::scope("/api/clients")
                    .route("", web::post().to(api::clients::register_client))
                    .route("", web::get().to(api::clients::list_clients))
                    .route("/{id}", web::get().to(api::clients::get_client)),
            )
            // Dashboard statistics
            .route("/api/stats", web::get().to(api::stats::get_stats))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
