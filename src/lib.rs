//! promptline: interactive terminal prompt with background task execution.

pub mod input;
pub mod task;
pub mod tui;
