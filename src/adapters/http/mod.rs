//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with DTOs, handlers, and routes. `router`
//! assembles them behind the authentication gate.

pub mod error;
pub mod health;
pub mod identity;
pub mod middleware;
pub mod router;
pub mod stats;
pub mod todo;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, with_http_layers, ApiHandlers};
pub use stats::{stats_routes, StatsHandlers};
pub use todo::{todo_routes, TodoHandlers};
