//! Application handlers.
//!
//! - `todo` - Commands that raise todo events
//! - `stats` - Stats queries and the listeners that keep stats current

pub mod stats;
pub mod todo;

pub use stats::{
    AuditLogger, GetUserStatsHandler, GetUserStatsQuery, StatsRecalculationHandler,
    StatsUpdateLogger,
};
pub use todo::{CompleteTodoCommand, CompleteTodoHandler, CompleteTodoResult};
