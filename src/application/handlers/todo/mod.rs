//! Todo command handlers.

mod complete_todo;

pub use complete_todo::{CompleteTodoCommand, CompleteTodoHandler, CompleteTodoResult};
