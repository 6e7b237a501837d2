//! Todo module - events raised when an end user works through their todos.
//!
//! Todo persistence lives outside this crate; only the completion event that
//! feeds the stats chain is modelled here.

mod events;

pub use events::TodoCompleted;
