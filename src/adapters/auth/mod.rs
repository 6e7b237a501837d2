//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` and `TokenIssuer` ports:
//!
//! - `jwt` - HS256 access tokens signed with the server secret
//! - `mock` - Test validator that maps fixed tokens to claims

mod jwt;
mod mock;

pub use jwt::{JwtConfig, JwtTokenService};
pub use mock::MockSessionValidator;
