//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, identity types, event
//! infrastructure, and error types that form the vocabulary of the BIF
//! domain.

mod auth;
mod command;
mod errors;
mod events;
mod ids;
mod timestamp;

pub use auth::{AuthError, Authority, IdentityClaims, IdentityContext, OAuthProvider, Role};
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, EventPattern,
    SerializableDomainEvent,
};
pub use ids::{SocialId, TodoId, UserId};
pub use timestamp::Timestamp;
