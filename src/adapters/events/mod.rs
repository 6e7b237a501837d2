//! Event bus adapters.
//!
//! - `InProcessEventBus` - Pattern-routed bus with synchronous handlers and
//!   a bounded worker pool for deferred ones

mod in_process;

pub use in_process::{EventBusConfig, InProcessEventBus};
