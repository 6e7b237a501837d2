//! Authentication types for the domain layer.
//!
//! These types represent the caller identity carried by a signed access
//! token. They have **no external dependencies**: the JWT adapter populates
//! them through the `SessionValidator` port, and HTTP handlers read them back
//! from the request's `IdentityContext`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::{SocialId, UserId, ValidationError};

/// Role of a BIF account. Drives every downstream authorization decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// The person keeping the diary and todos.
    EndUser,
    /// A caregiver who supervises one or more end users.
    Guardian,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::EndUser => "END_USER",
            Role::Guardian => "GUARDIAN",
        }
    }

    /// The authority string granted to holders of this role.
    pub fn authority(&self) -> Authority {
        Authority(format!("ROLE_{}", self.as_str()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "END_USER" => Ok(Role::EndUser),
            "GUARDIAN" => Ok(Role::Guardian),
            _ => Err(AuthError::UnknownRoleValue),
        }
    }
}

/// Social login provider the account was created through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OAuthProvider {
    Kakao,
    Naver,
    Google,
}

/// A granted authority, e.g. `ROLE_GUARDIAN`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity facts embedded in an access token.
///
/// Built once at login and never mutated; every request reads an equal copy
/// back out of the verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaims {
    pub user_id: UserId,
    pub nickname: String,
    pub provider: OAuthProvider,
    pub provider_unique_id: String,
    pub role: Role,
    pub social_id: SocialId,
}

impl IdentityClaims {
    /// Creates claims, rejecting blank nicknames and provider ids.
    pub fn new(
        user_id: UserId,
        nickname: impl Into<String>,
        provider: OAuthProvider,
        provider_unique_id: impl Into<String>,
        role: Role,
        social_id: SocialId,
    ) -> Result<Self, ValidationError> {
        let nickname = nickname.into();
        let provider_unique_id = provider_unique_id.into();

        if nickname.trim().is_empty() {
            return Err(ValidationError::empty_field("nickname"));
        }
        if provider_unique_id.trim().is_empty() {
            return Err(ValidationError::empty_field("provider_unique_id"));
        }

        Ok(Self {
            user_id,
            nickname,
            provider,
            provider_unique_id,
            role,
            social_id,
        })
    }
}

/// Request-scoped view of the authenticated caller.
///
/// Inserted into request extensions by the authentication gate and read by
/// handlers through the `RequireAuth`/`OptionalAuth` extractors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityContext {
    claims: IdentityClaims,
    authorities: Vec<Authority>,
}

impl IdentityContext {
    /// Builds the context and derives authorities from the role.
    pub fn new(claims: IdentityClaims) -> Self {
        let authorities = vec![claims.role.authority()];
        Self {
            claims,
            authorities,
        }
    }

    pub fn claims(&self) -> &IdentityClaims {
        &self.claims
    }

    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }

    pub fn user_id(&self) -> UserId {
        self.claims.user_id
    }

    pub fn role(&self) -> Role {
        self.claims.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.claims.role == role
    }

    /// Fails with `AuthError::Forbidden` unless the caller holds `role`.
    pub fn require_role(&self, role: Role) -> Result<(), AuthError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

/// Authentication and authorization failures.
///
/// The reason code doubles as the client-facing message and error code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Not a structurally valid token (segments, base64, JSON, algorithm, required claims).
    #[error("malformed-token")]
    MalformedToken,

    #[error("invalid-signature")]
    InvalidSignature,

    #[error("expired-token")]
    ExpiredToken,

    #[error("missing-role-claim")]
    MissingRoleClaim,

    #[error("unknown-role-value")]
    UnknownRoleValue,

    /// Authenticated, but the role does not allow the operation.
    #[error("forbidden")]
    Forbidden,

    /// The server could not sign a token.
    #[error("token-issuance-failed: {0}")]
    TokenIssuance(String),
}

impl AuthError {
    /// Stable reason code for responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MalformedToken => "malformed-token",
            AuthError::InvalidSignature => "invalid-signature",
            AuthError::ExpiredToken => "expired-token",
            AuthError::MissingRoleClaim => "missing-role-claim",
            AuthError::UnknownRoleValue => "unknown-role-value",
            AuthError::Forbidden => "forbidden",
            AuthError::TokenIssuance(_) => "token-issuance-failed",
        }
    }
}

#[cfg(test)]
impl IdentityClaims {
    /// End-user claims for user 42, shared by unit tests across the crate.
    pub fn test_fixture() -> Self {
        Self {
            user_id: UserId::new(42).expect("positive id"),
            nickname: "haneul".to_string(),
            provider: OAuthProvider::Kakao,
            provider_unique_id: "kakao-3141592".to_string(),
            role: Role::EndUser,
            social_id: SocialId::new(3_141_592).expect("positive id"),
        }
    }

    /// Same identity with a different role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_user_claims() -> IdentityClaims {
        IdentityClaims::test_fixture()
    }

    #[test]
    fn role_parses_known_values() {
        assert_eq!("END_USER".parse::<Role>().unwrap(), Role::EndUser);
        assert_eq!("GUARDIAN".parse::<Role>().unwrap(), Role::Guardian);
    }

    #[test]
    fn role_rejects_unknown_value() {
        assert_eq!("ADMIN".parse::<Role>(), Err(AuthError::UnknownRoleValue));
        assert_eq!("end_user".parse::<Role>(), Err(AuthError::UnknownRoleValue));
    }

    #[test]
    fn role_serializes_screaming_snake_case() {
        assert_eq!(serde_json::to_string(&Role::EndUser).unwrap(), "\"END_USER\"");
    }

    #[test]
    fn claims_reject_blank_nickname() {
        let result = IdentityClaims::new(
            UserId::new(1).unwrap(),
            "   ",
            OAuthProvider::Naver,
            "naver-1",
            Role::Guardian,
            SocialId::new(1).unwrap(),
        );
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn identity_context_derives_authority_from_role() {
        let ctx = IdentityContext::new(end_user_claims());

        assert_eq!(ctx.user_id().value(), 42);
        assert_eq!(ctx.authorities().len(), 1);
        assert_eq!(ctx.authorities()[0].as_str(), "ROLE_END_USER");
        assert!(!ctx.has_role(Role::Guardian));
    }

    #[test]
    fn require_role_forbids_other_roles() {
        let ctx = IdentityContext::new(end_user_claims());

        assert!(ctx.require_role(Role::EndUser).is_ok());
        assert_eq!(ctx.require_role(Role::Guardian), Err(AuthError::Forbidden));
    }

    #[test]
    fn auth_error_display_matches_code() {
        for err in [
            AuthError::MalformedToken,
            AuthError::InvalidSignature,
            AuthError::ExpiredToken,
            AuthError::MissingRoleClaim,
            AuthError::UnknownRoleValue,
            AuthError::Forbidden,
        ] {
            assert_eq!(err.to_string(), err.code());
        }
    }
}
