//! HTTP adapter for the caller's own identity.

mod dto;
mod handlers;
mod routes;

pub use dto::MeResponse;
pub use handlers::get_me;
pub use routes::identity_routes;
