//! Stats module - per-user progress counters refreshed from todo events.

mod events;
mod user_stats;

pub use events::StatsUpdated;
pub use user_stats::UserStats;
