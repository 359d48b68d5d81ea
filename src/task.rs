//! The background task: what one submission actually computes.
//!
//! Pure function — no sleeping, no threads. The effects boundary
//! (`tui::run`) wraps this in a worker thread that waits out the
//! simulated latency and posts the result back as an event. This is
//! where a real external call (API, model invocation) would go.

use std::fmt;

// ============================================================================
// ERRORS
// ============================================================================

/// Error produced by a task.
///
/// Empty input is the only failure mode: it is recoverable and surfaced
/// as a status line, never a process exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// The submitted text was empty after trimming.
    EmptyInput,
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskError::EmptyInput => write!(f, "input was empty"),
        }
    }
}

impl std::error::Error for TaskError {}

// ============================================================================
// EXECUTION
// ============================================================================

/// Run the task body on the submitted text.
///
/// Fails on whitespace-only input, otherwise returns the uppercased text.
pub fn execute(input: &str) -> Result<String, TaskError> {
    if input.trim().is_empty() {
        return Err(TaskError::EmptyInput);
    }
    Ok(input.to_uppercase())
}

// ============================================================================
// TESTS
// ============================================================================
