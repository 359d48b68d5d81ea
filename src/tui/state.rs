//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire state space of the prompt. The
//! transition functions (`update`) and the rendering layer (`view`)
//! both program against them; nothing here touches a terminal.
//!
//! Each transition consumes the previous `App` value and returns the
//! next one. The model is never shared across threads — background
//! work communicates through `AppEvent`s on a channel, not through
//! the model.

use crossterm::event::KeyEvent;

use crate::input::{EditOp, InputField};

/// Submitting this literal text quits the program.
pub const EXIT_COMMAND: &str = "/exit";

const PLACEHOLDER: &str = "Type a label and press enter";

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Several producers feed a single mpsc channel:
/// - The terminal reader thread sends `Key` and `Resize`
/// - One-shot timer threads send `Tick` and `SpinnerTick`
/// - The worker thread sends `TaskDone` or `TaskFailed` (one per task)
///
/// The loop dispatches: `Key` goes through `map_key → apply`, everything
/// else through `handle_event`. Events are processed strictly in arrival
/// order; the frame drawn after each one sees the fully updated state.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The terminal was resized to (width, height).
    Resize(u16, u16),
    /// Periodic counter tick.
    Tick,
    /// Spinner animation tick, live only while a task is outstanding.
    SpinnerTick,
    /// The background task finished with a result.
    TaskDone(String),
    /// The background task failed with a message.
    TaskFailed(String),
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Status line shown under the busy indicator.
///
/// An enum rather than free text so the view owns the wording and
/// styling; the transition layer only records which outcome happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLine {
    /// Nothing to report (startup, or before the first submission).
    #[default]
    Empty,
    /// A task is running.
    Working,
    /// The last task completed.
    Success,
    /// The last task failed.
    Failure,
}

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    /// Terminal width, 0 until the first resize event.
    pub width: u16,
    /// Terminal height, 0 until the first resize event.
    pub height: u16,
    /// The editable input line.
    pub input: InputField,
    /// Last task result (or failure message).
    pub response: String,
    /// Counter incremented once per tick, unbounded.
    pub count: u64,
    /// True while exactly one task is outstanding. Gates submission.
    pub busy: bool,
    /// Current status line.
    pub status: StatusLine,
    /// Index into the spinner frame table.
    pub spinner_frame: usize,
    /// Set to true when the app should exit on the next loop pass.
    pub should_quit: bool,
}

impl App {
    /// Create the starting model: empty input, counter at zero, idle.
    pub fn new() -> Self {
        App {
            width: 0,
            height: 0,
            input: InputField::new(PLACEHOLDER),
            response: String::new(),
            count: 0,
            busy: false,
            status: StatusLine::Empty,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Starting model plus the initial effect: the counter tick chain
    /// begins at launch and is only broken by termination.
    pub fn init() -> (Self, Effect) {
        (Self::new(), Effect::ScheduleTick)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition
/// function decides what each one means given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit immediately (ctrl+c), from any state.
    Quit,
    /// Clear the input buffer (esc).
    ClearInput,
    /// Submit the input buffer (enter). Ignored while busy.
    Submit,
    /// Edit the input buffer.
    Edit(EditOp),
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Side effect requested by a pure transition.
///
/// Pure code never executes these — it only describes them. The effects
/// boundary interprets each one, feeding results back as `AppEvent`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Spawn the background task for one submission and start the
    /// spinner tick chain.
    StartTask {
        /// Trimmed submitted text.
        payload: String,
    },
    /// Post the next counter `Tick` after the tick interval.
    ScheduleTick,
    /// Post the next `SpinnerTick` after the spinner interval.
    ScheduleSpinner,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_idle_with_zero_dimensions() {
        let app = App::new();
        assert_eq!((app.width, app.height), (0, 0));
        assert!(app.input.is_empty());
        assert_eq!(app.count, 0);
        assert!(!app.busy);
        assert_eq!(app.status, StatusLine::Empty);
        assert!(!app.should_quit);
    }

    #[test]
    fn init_schedules_the_counter_tick_chain() {
        let (app, effect) = App::init();
        assert_eq!(app, App::new());
        assert_eq!(effect, Effect::ScheduleTick);
    }

    #[test]
    fn status_line_defaults_to_empty() {
        assert_eq!(StatusLine::default(), StatusLine::Empty);
    }

    #[test]
    fn exit_command_is_slash_exit() {
        assert_eq!(EXIT_COMMAND, "/exit");
    }
}
