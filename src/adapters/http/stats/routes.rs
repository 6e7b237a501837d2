//! HTTP routes for stats endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_my_stats, get_user_stats_as_guardian, StatsHandlers};

pub fn stats_routes(handlers: StatsHandlers) -> Router {
    Router::new()
        .route("/api/stats/me", get(get_my_stats))
        .route(
            "/api/guardian/users/:user_id/stats",
            get(get_user_stats_as_guardian),
        )
        .with_state(handlers)
}
