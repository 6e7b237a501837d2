//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, identity, events, errors)
//! - `todo` - Todo completion events
//! - `stats` - Per-user progress stats and their update event

pub mod foundation;
pub mod stats;
pub mod todo;
