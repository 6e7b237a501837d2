//! HTTP handlers for stats endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::stats::{GetUserStatsHandler, GetUserStatsQuery};
use crate::domain::foundation::{Role, UserId};

use super::dto::UserStatsResponse;

#[derive(Clone)]
pub struct StatsHandlers {
    get_handler: Arc<GetUserStatsHandler>,
}

impl StatsHandlers {
    pub fn new(get_handler: Arc<GetUserStatsHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/stats/me - The caller's own stats
pub async fn get_my_stats(
    State(handlers): State<StatsHandlers>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<UserStatsResponse>, ApiError> {
    let stats = handlers
        .get_handler
        .handle(GetUserStatsQuery {
            user_id: identity.user_id(),
        })
        .await?;

    Ok(Json(stats.into()))
}

/// GET /api/guardian/users/:user_id/stats - Any user's stats, guardians only
pub async fn get_user_stats_as_guardian(
    State(handlers): State<StatsHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(user_id): Path<String>,
) -> Result<Json<UserStatsResponse>, ApiError> {
    identity.require_role(Role::Guardian)?;

    let user_id = user_id
        .parse::<UserId>()
        .map_err(|_| ApiError::bad_request("Invalid user ID"))?;

    let stats = handlers
        .get_handler
        .handle(GetUserStatsQuery { user_id })
        .await?;

    Ok(Json(stats.into()))
}
