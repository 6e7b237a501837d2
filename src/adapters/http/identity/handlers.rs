//! HTTP handlers for identity endpoints.

use axum::Json;

use crate::adapters::http::middleware::RequireAuth;

use super::dto::MeResponse;

/// GET /api/me - The authenticated caller's identity
pub async fn get_me(RequireAuth(identity): RequireAuth) -> Json<MeResponse> {
    Json(MeResponse::from(&identity))
}
