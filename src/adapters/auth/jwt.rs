//! HS256 JWT adapter for access tokens.
//!
//! Implements both `TokenIssuer` and `SessionValidator` with a single shared
//! secret. Tokens are self-contained: validation needs only the secret and
//! the clock.
//!
//! # Wire claims
//!
//! ```text
//! { "userId": 42, "nickname": "haneul", "provider": "KAKAO",
//!   "providerUniqueId": "kakao-3141592", "role": "END_USER",
//!   "socialId": 3141592, "iat": 1705276800, "exp": 1705280400 }
//! ```
//!
//! # Failure mapping
//!
//! | jsonwebtoken outcome                  | `AuthError`          |
//! |---------------------------------------|----------------------|
//! | signature mismatch                    | `InvalidSignature`   |
//! | `exp` in the past (after leeway)      | `ExpiredToken`       |
//! | anything else (shape, base64, JSON, algorithm, missing `exp`) | `MalformedToken` |
//!
//! Claims that decode but fail identity validation (non-positive ids, blank
//! nickname or provider id) are also `MalformedToken`.
//!
//! The signature is checked before any claim, so a tampered token is always
//! reported as `InvalidSignature` even when it has also expired.

use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    AuthError, IdentityClaims, OAuthProvider, Role, SocialId, Timestamp, UserId,
};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Configuration for the JWT adapter.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: SecretString,

    /// Lifetime of issued access tokens.
    pub access_token_ttl: Duration,

    /// Clock skew tolerated when checking `exp`.
    pub leeway: Duration,
}

impl JwtConfig {
    /// Create a configuration with a one hour TTL and no leeway.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            access_token_ttl: Duration::from_secs(3600),
            leeway: Duration::ZERO,
        }
    }

    pub fn with_access_token_ttl(mut self, ttl: Duration) -> Self {
        self.access_token_ttl = ttl;
        self
    }

    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }
}

/// Claims as they appear inside the token.
///
/// `role` stays a raw optional string so that a missing or unknown role can
/// be reported precisely instead of as a generic decoding failure.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: UserId,
    nickname: String,
    provider: OAuthProvider,
    provider_unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    social_id: SocialId,
    iat: i64,
    exp: i64,
}

impl TokenClaims {
    fn from_identity(claims: &IdentityClaims, issued_at: Timestamp, expires_at: Timestamp) -> Self {
        Self {
            user_id: claims.user_id,
            nickname: claims.nickname.clone(),
            provider: claims.provider,
            provider_unique_id: claims.provider_unique_id.clone(),
            role: Some(claims.role.as_str().to_string()),
            social_id: claims.social_id,
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        }
    }

    fn into_identity(self) -> Result<IdentityClaims, AuthError> {
        let role: Role = self.role.ok_or(AuthError::MissingRoleClaim)?.parse()?;

        IdentityClaims::new(
            self.user_id,
            self.nickname,
            self.provider,
            self.provider_unique_id,
            role,
            self.social_id,
        )
        .map_err(|_| AuthError::MalformedToken)
    }
}

/// Issues and validates HS256 access tokens.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl: Duration,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let secret = config.secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway.as_secs();
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_token_ttl: config.access_token_ttl,
        }
    }

    /// Signs `claims` into a token that expires at `expires_at`.
    pub fn issue_expiring_at(
        &self,
        claims: &IdentityClaims,
        expires_at: Timestamp,
    ) -> Result<IssuedToken, AuthError> {
        let wire = TokenClaims::from_identity(claims, Timestamp::now(), expires_at);

        let access_token = encode(&Header::new(Algorithm::HS256), &wire, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("Failed to sign access token: {}", e);
                AuthError::TokenIssuance(e.to_string())
            })?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Synchronous validation; the async port delegates here.
    pub fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                let reason = match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                    ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
                    _ => AuthError::MalformedToken,
                };
                tracing::debug!(reason = reason.code(), "Access token rejected: {}", e);
                reason
            },
        )?;

        data.claims.into_identity().map_err(|reason| {
            tracing::debug!(reason = reason.code(), "Access token rejected");
            reason
        })
    }
}

impl TokenIssuer for JwtTokenService {
    fn issue(&self, claims: &IdentityClaims) -> Result<IssuedToken, AuthError> {
        let expires_at = i64::try_from(self.access_token_ttl.as_secs())
            .ok()
            .and_then(|ttl| Timestamp::now().checked_plus_secs(ttl))
            .ok_or_else(|| AuthError::TokenIssuance("access token ttl out of range".to_string()))?;
        self.issue_expiring_at(claims, expires_at)
    }
}

#[async_trait]
impl SessionValidator for JwtTokenService {
    async fn validate(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        self.verify(token)
    }
}
