//! TUI color semantics and the spinner frame table.
//!
//! Centralized style definitions, pure data — consumed only by the
//! rendering layer. The state machine never touches a style, so it
//! stays testable without a terminal.
//!
//! Color semantics:
//! - Cyan: activity (spinner, processing line)
//! - Green: success status
//! - Red: failure status
//! - Dim: de-emphasized (help line, placeholder)
//! - Bold: the title

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SPINNER
// ============================================================================

/// Braille spinner animation frames, advanced one step per spinner tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

// ============================================================================
// STYLES
// ============================================================================

/// Title bar.
pub const STYLE_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Spinner and the "Processing..." line.
pub const STYLE_SPINNER: Style = Style::new().fg(Color::Cyan);

/// Status line: task running.
pub const STYLE_WORKING: Style = Style::new().fg(Color::Yellow);

/// Status line: task completed.
pub const STYLE_SUCCESS: Style = Style::new().fg(Color::Green);

/// Status line: task failed.
pub const STYLE_FAILURE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Input field border.
pub const STYLE_INPUT_BORDER: Style = Style::new().fg(Color::Cyan);

/// Placeholder text while the input is empty.
pub const STYLE_PLACEHOLDER: Style = Style::new().fg(Color::DarkGray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
