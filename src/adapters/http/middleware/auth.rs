//! Authentication gate and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that validates Bearer tokens and attaches the caller's identity
//! - `RequireAuth` - Extractor that requires authentication
//! - `OptionalAuth` - Extractor for optional authentication
//!
//! # Architecture
//!
//! The middleware uses the `SessionValidator` port, so it does not care
//! whether tokens are checked by the JWT codec or by a test double.
//!
//! ```text
//! Request → auth_middleware → injects IdentityContext into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! A request without an `Authorization` header, or with a scheme other than
//! `Bearer`, passes through anonymously. A Bearer token that fails
//! validation is answered with 401 and never reaches a handler.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let validator: Arc<dyn SessionValidator> = Arc::new(jwt_service);
//!
//! let app = Router::new()
//!     .route("/api/me", get(me))
//!     .layer(middleware::from_fn_with_state(validator.clone(), auth_middleware));
//!
//! async fn me(RequireAuth(identity): RequireAuth) -> String {
//!     format!("Hello, {}!", identity.claims().nickname)
//! }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::IdentityContext;
use crate::ports::SessionValidator;

/// Auth middleware state - wraps the session validator.
pub type AuthState = Arc<dyn SessionValidator>;

/// Authentication middleware that validates Bearer tokens.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the `SessionValidator` port
/// 3. On success, injects `IdentityContext` into request extensions
/// 4. On missing token, continues without injecting (for optional auth routes)
/// 5. On invalid token, returns 401 with the failure's reason code
///
/// # Token Extraction
///
/// Expects the token in the `Authorization` header with `Bearer` prefix:
/// ```text
/// Authorization: Bearer <token>
/// ```
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_owned);

    let Some(token) = token else {
        // No token provided - continue without auth
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(claims) => {
            tracing::debug!(
                user_id = %claims.user_id,
                role = %claims.role,
                "request authenticated"
            );
            request
                .extensions_mut()
                .insert(IdentityContext::new(claims));
            next.run(request).await
        }
        Err(e) => {
            tracing::debug!(reason = e.code(), "authentication rejected");
            ApiError::from(e).into_response()
        }
    }
}

/// Extractor that requires authentication.
///
/// If no identity is in the request extensions (i.e., auth middleware didn't
/// successfully validate a token), returns 401 `unauthenticated`.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireAuth(identity): RequireAuth) -> impl IntoResponse {
///     format!("Hello, {}!", identity.claims().nickname)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAuth(pub IdentityContext);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<IdentityContext>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Extractor for optional authentication.
///
/// Returns `None` for anonymous requests, `Some(identity)` if authenticated.
#[derive(Debug, Clone)]
pub struct OptionalAuth(pub Option<IdentityContext>);

impl<S> axum::extract::FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let identity = parts.extensions.get::<IdentityContext>().cloned();
            Ok(OptionalAuth(identity))
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => ApiError::unauthenticated().into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::{AuthError, IdentityClaims, Role};
    use axum::{body::Body, http::StatusCode, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app(validator: MockSessionValidator) -> Router {
        let state: AuthState = Arc::new(validator);

        async fn whoami(OptionalAuth(identity): OptionalAuth) -> String {
            match identity {
                Some(identity) => format!("{}:{}", identity.user_id(), identity.role()),
                None => "anonymous".to_string(),
            }
        }

        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(state, auth_middleware))
    }

    fn request(authorization: Option<&str>) -> axum::http::Request<Body> {
        let mut builder = axum::http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn validator() -> MockSessionValidator {
        MockSessionValidator::new()
            .with_claims("end-user", IdentityClaims::test_fixture())
            .with_claims(
                "guardian",
                IdentityClaims::test_fixture().with_role(Role::Guardian),
            )
            .with_token_error("tampered", AuthError::InvalidSignature)
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Gate Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_token_attaches_identity() {
        let response = app(validator())
            .oneshot(request(Some("Bearer end-user")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "42:END_USER");
    }

    #[tokio::test]
    async fn guardian_token_carries_guardian_role() {
        let response = app(validator())
            .oneshot(request(Some("Bearer guardian")))
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "42:GUARDIAN");
    }

    #[tokio::test]
    async fn missing_header_passes_through_anonymously() {
        let response = app(validator()).oneshot(request(None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "anonymous");
    }

    #[tokio::test]
    async fn non_bearer_scheme_passes_through_anonymously() {
        let response = app(validator())
            .oneshot(request(Some("Basic dXNlcjpwYXNz")))
            .await
            .unwrap();

        assert_eq!(body_string(response).await, "anonymous");
    }

    #[tokio::test]
    async fn invalid_token_short_circuits_with_reason_code() {
        let response = app(validator())
            .oneshot(request(Some("Bearer tampered")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["errorCode"], "invalid-signature");
        assert_eq!(body["message"], "invalid-signature");
    }

    #[tokio::test]
    async fn unknown_token_is_rejected_as_malformed() {
        let response = app(validator())
            .oneshot(request(Some("Bearer who-knows")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("malformed-token"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireAuth Extractor Tests
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_extracts_identity_from_extensions() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let mut request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        request
            .extensions_mut()
            .insert(IdentityContext::new(IdentityClaims::test_fixture()));

        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        let RequireAuth(identity) = result.unwrap();
        assert_eq!(identity.user_id().value(), 42);
    }

    #[tokio::test]
    async fn require_auth_fails_without_identity() {
        use axum::extract::FromRequestParts;
        use axum::http::Request;

        let request: Request<()> = Request::builder().uri("/test").body(()).unwrap();
        let (mut parts, _body) = request.into_parts();

        let result: Result<RequireAuth, AuthRejection> =
            RequireAuth::from_request_parts(&mut parts, &()).await;

        assert!(matches!(result, Err(AuthRejection::Unauthenticated)));
    }

    #[tokio::test]
    async fn auth_rejection_returns_401_unauthenticated() {
        let response = AuthRejection::Unauthenticated.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("\"errorCode\":\"unauthenticated\""));
    }

    #[test]
    fn auth_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AuthState>();
        assert_send_sync::<RequireAuth>();
        assert_send_sync::<OptionalAuth>();
    }
}
