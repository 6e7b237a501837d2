//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Auth Ports
//!
//! - `SessionValidator` - Validates bearer tokens into identity claims
//! - `TokenIssuer` - Signs identity claims into access tokens
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events
//!
//! ## Persistence Ports
//!
//! - `StatsRepository` - Per-user stats storage

mod event_publisher;
mod event_subscriber;
mod session_validator;
mod stats_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{DispatchMode, EventBus, EventHandler, EventSubscriber};
pub use session_validator::{IssuedToken, SessionValidator, TokenIssuer};
pub use stats_repository::StatsRepository;
