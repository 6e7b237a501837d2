//! HTTP routes for identity endpoints.

use axum::{routing::get, Router};

use super::handlers::get_me;

pub fn identity_routes() -> Router {
    Router::new().route("/api/me", get(get_me))
}
