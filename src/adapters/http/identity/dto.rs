//! DTOs for identity endpoints.

use serde::Serialize;

use crate::domain::foundation::{IdentityContext, OAuthProvider, Role};

/// Response for GET /api/me.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: i64,
    pub nickname: String,
    pub provider: OAuthProvider,
    pub provider_unique_id: String,
    pub role: Role,
    pub social_id: i64,
    pub authorities: Vec<String>,
}

impl From<&IdentityContext> for MeResponse {
    fn from(identity: &IdentityContext) -> Self {
        let claims = identity.claims();
        Self {
            user_id: claims.user_id.value(),
            nickname: claims.nickname.clone(),
            provider: claims.provider,
            provider_unique_id: claims.provider_unique_id.clone(),
            role: claims.role,
            social_id: claims.social_id.value(),
            authorities: identity
                .authorities()
                .iter()
                .map(|a| a.as_str().to_string())
                .collect(),
        }
    }
}
