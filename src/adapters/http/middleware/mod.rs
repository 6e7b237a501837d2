//! HTTP middleware for axum.
//!
//! - `auth` - Authentication gate and extractors

pub mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, OptionalAuth, RequireAuth};
