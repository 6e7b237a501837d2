//! HTTP adapter for stats endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::UserStatsResponse;
pub use handlers::StatsHandlers;
pub use routes::stats_routes;
