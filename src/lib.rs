//! BIF Server - backend core for the BIF todo service.
//!
//! Provides the access-token codec, the HTTP authentication gate, and an
//! in-process domain event bus that keeps per-user stats current as todos
//! are completed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
