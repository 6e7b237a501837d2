//! HTTP routes for todo endpoints.

use axum::{routing::post, Router};

use super::handlers::{complete_todo, TodoHandlers};

pub fn todo_routes(handlers: TodoHandlers) -> Router {
    Router::new()
        .route("/api/todos/:todo_id/complete", post(complete_todo))
        .with_state(handlers)
}
