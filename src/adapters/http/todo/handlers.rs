//! HTTP handlers for todo endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::todo::{CompleteTodoCommand, CompleteTodoHandler};
use crate::domain::foundation::{CommandMetadata, TodoId};

use super::dto::CompleteTodoResponse;

/// Header set by the request-id layer; reused as the event correlation id.
const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct TodoHandlers {
    complete_handler: Arc<CompleteTodoHandler>,
}

impl TodoHandlers {
    pub fn new(complete_handler: Arc<CompleteTodoHandler>) -> Self {
        Self { complete_handler }
    }
}

/// POST /api/todos/:todo_id/complete - Mark a todo as completed
///
/// Answers 202: stats are refreshed after the response by deferred listeners.
pub async fn complete_todo(
    State(handlers): State<TodoHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(todo_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    let todo_id = todo_id
        .parse::<TodoId>()
        .map_err(|_| ApiError::bad_request("Invalid todo ID"))?;

    let mut metadata = CommandMetadata::new(identity.user_id()).with_source("api");
    if let Some(request_id) = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        metadata = metadata.with_correlation_id(request_id);
    }

    let result = handlers
        .complete_handler
        .handle(CompleteTodoCommand { todo_id }, metadata)
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(CompleteTodoResponse::from(&result.event)),
    )
        .into_response())
}
