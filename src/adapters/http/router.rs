//! Router assembly.
//!
//! ```text
//! SetRequestId → Trace → PropagateRequestId → Cors → Timeout → auth_middleware → route
//! ```

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware, Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::HttpConfig;

use super::health::health_routes;
use super::identity::identity_routes;
use super::middleware::{auth_middleware, AuthState};
use super::stats::{stats_routes, StatsHandlers};
use super::todo::{todo_routes, TodoHandlers};

const REQUEST_ID: &str = "x-request-id";

/// Everything the routes need, built by the composition root.
#[derive(Clone)]
pub struct ApiHandlers {
    pub validator: AuthState,
    pub todo: TodoHandlers,
    pub stats: StatsHandlers,
}

/// All routes behind the authentication gate.
pub fn api_router(handlers: ApiHandlers) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(identity_routes())
        .merge(todo_routes(handlers.todo))
        .merge(stats_routes(handlers.stats))
        .layer(middleware::from_fn_with_state(
            handlers.validator,
            auth_middleware,
        ))
}

/// Wraps a router in request-id, tracing, CORS, and timeout layers.
pub fn with_http_layers(router: Router, config: &HttpConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID);

    router
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

fn cors_layer(config: &HttpConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}
