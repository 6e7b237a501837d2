//! Mock session validator for testing.
//!
//! Implements the `SessionValidator` port without signing anything, so the
//! authentication gate can be exercised with fixed tokens and forced errors.
//!
//! # Example
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_claims("valid-token", claims)
//!     .with_token_error("expired", AuthError::ExpiredToken);
//!
//! let result = validator.validate("valid-token").await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, IdentityClaims};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Tokens not registered return `MalformedToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    tokens: RwLock<HashMap<String, Result<IdentityClaims, AuthError>>>,
    /// Returned for every token when set.
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a token that validates to `claims`.
    pub fn with_claims(self, token: impl Into<String>, claims: IdentityClaims) -> Self {
        self.insert(token.into(), Ok(claims));
        self
    }

    /// Registers a token that fails with `error`.
    pub fn with_token_error(self, token: impl Into<String>, error: AuthError) -> Self {
        self.insert(token.into(), Err(error));
        self
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Clears the forced error and returns to normal operation.
    pub fn clear_error(&self) {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Removes a token, making it unknown.
    pub fn remove_token(&self, token: &str) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(token);
    }

    fn insert(&self, token: String, outcome: Result<IdentityClaims, AuthError>) {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token, outcome);
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .unwrap_or(Err(AuthError::MalformedToken))
    }
}
