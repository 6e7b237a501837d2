//! Stats handlers and event listeners.

mod audit_logger;
mod get_user_stats;
mod recalculate_stats;
mod stats_update_logger;

pub use audit_logger::AuditLogger;
pub use get_user_stats::{GetUserStatsHandler, GetUserStatsQuery};
pub use recalculate_stats::StatsRecalculationHandler;
pub use stats_update_logger::StatsUpdateLogger;
