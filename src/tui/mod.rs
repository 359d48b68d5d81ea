//! TUI module for the interactive prompt.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: Pure data types (App, AppEvent, Action, Effect)
//! - `update`: Pure transitions
//! - `view`: Pure rendering
//! - `theme`: Styling as data
//! - `run`: Effects boundary (terminal, threads, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
