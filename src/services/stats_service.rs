use chrono::{DateTime, Datelike, Local};
use serde::Serialize;

use crate::models::{ClientRecord, ClientType};

// Declarations workflow figures. That pipeline lives outside this service,
// so the dashboard carries fixed values until it is wired in.
pub const ACTIVE_DECLARATIONS: u64 = 12;
pub const PENDING_REVIEWS: u64 = 3;
pub const COMPLETED_THIS_MONTH: u64 = 45;

/// Aggregate counts over the client collection. Recomputed from a full scan
/// on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: u64,
    pub exporters: u64,
    pub importers: u64,
    pub both: u64,
    pub this_month: u64,
    pub active_declarations: u64,
    pub pending_reviews: u64,
    pub completed_this_month: u64,
}

impl DashboardStats {
    fn seed() -> Self {
        DashboardStats {
            total_clients: 0,
            exporters: 0,
            importers: 0,
            both: 0,
            this_month: 0,
            active_declarations: ACTIVE_DECLARATIONS,
            pending_reviews: PENDING_REVIEWS,
            completed_this_month: COMPLETED_THIS_MONTH,
        }
    }
}

/// Single pass over the records. `this_month` buckets registration instants
/// by calendar month and year in local time, like the dashboards that
/// consume it; a registration date that does not parse still counts toward
/// the total but toward nothing else.
pub fn compute_stats(clients: &[ClientRecord], now: DateTime<Local>) -> DashboardStats {
    let mut stats = DashboardStats::seed();

    for client in clients {
        stats.total_clients += 1;

        if let Ok(registered) = DateTime::parse_from_rfc3339(&client.registration_date) {
            let registered = registered.with_timezone(&Local);
            if registered.month() == now.month() && registered.year() == now.year() {
                stats.this_month += 1;
            }
        }

        match ClientType::classify(&client.client_type) {
            ClientType::Exporter => stats.exporters += 1,
            ClientType::Importer => stats.importers += 1,
            ClientType::Both => stats.both += 1,
            ClientType::Unspecified => {}
        }
    }

    stats
}
