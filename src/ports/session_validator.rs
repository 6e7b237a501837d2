//! Session validation ports for access tokens.
//!
//! `SessionValidator` turns a raw bearer token back into the identity claims
//! it carries; `TokenIssuer` is its counterpart used once at login. Both are
//! provider-agnostic: the JWT adapter implements them in production and
//! tests can substitute a mock.
//!
//! # Contract
//!
//! Implementations of `validate` must:
//! - Reject tokens not signed with the server's key (`InvalidSignature`)
//! - Reject tokens past their expiry (`ExpiredToken`)
//! - Reject structurally broken tokens (`MalformedToken`)
//! - Reject tokens without a usable role (`MissingRoleClaim`, `UnknownRoleValue`)
//! - Have no side effects and consult no server-side session state

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, IdentityClaims, Timestamp};

/// Validates access tokens and extracts the caller's identity claims.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<IdentityClaims, AuthError>;
}

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: Timestamp,
}

/// Signs identity claims into an access token.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: &IdentityClaims) -> Result<IssuedToken, AuthError>;
}
