//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations through the ports. Command handlers
//! publish domain events; event handlers react to them on the bus.

pub mod handlers;

pub use handlers::{
    AuditLogger, CompleteTodoCommand, CompleteTodoHandler, CompleteTodoResult,
    GetUserStatsHandler, GetUserStatsQuery, StatsRecalculationHandler, StatsUpdateLogger,
};
