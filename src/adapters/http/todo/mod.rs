//! HTTP adapter for todo endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::CompleteTodoResponse;
pub use handlers::TodoHandlers;
pub use routes::todo_routes;
