//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `auth` - JWT codec and a mock validator
//! - `events` - In-process event bus
//! - `http` - axum routes and the authentication gate
//! - `stats` - Stats storage

pub mod auth;
pub mod events;
pub mod http;
pub mod stats;

pub use auth::{JwtConfig, JwtTokenService, MockSessionValidator};
pub use events::{EventBusConfig, InProcessEventBus};
pub use stats::InMemoryStatsRepository;
