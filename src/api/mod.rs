pub mod clients;
pub mod health;
pub mod metrics;
pub mod stats;
pub mod swagger;
