use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CustomsBridge API",
        version = "1.0.0",
        description = "Client registration API for customs brokerage.\n\n**Features:**\n- Exporter/importer client registration with GSTIN and email uniqueness\n- Client directory lookup\n- Dashboard statistics\n- Health monitoring and metrics",
        contact(
            name = "CustomsBridge Team",
            email = "support@customsbridge.in"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Clients
        crate::api::clients::register_client,
        crate::api::clients::list_clients,
        crate::api::clients::get_client,

        // Stats
        crate::api::stats::get_stats,
    ),
    components(
        schemas(
            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,

            // Clients
            crate::models::client::ClientRecord,
            crate::models::client::ClientRegistrationData,

            // Stats
            crate::services::stats_service::DashboardStats,
        )
    ),
    tags(
        (name = "Health", description = "Health check and process metrics endpoints for monitoring service status."),
        (name = "Clients", description = "Customs client registration and directory endpoints. Registrations are validated and checked for duplicate email/GSTIN before being persisted."),
        (name = "Stats", description = "Aggregate dashboard statistics computed over the client registry."),
    )
)]
pub struct ApiDoc;
