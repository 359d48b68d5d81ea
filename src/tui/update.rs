//! Pure state transitions.
//!
//! This is the core logic of the prompt. Fully testable without a
//! terminal, threads, or timers. Two entry points:
//! - [`apply`]: user actions (mapped from key presses)
//! - [`handle_event`]: timer and background events
//!
//! Both consume the current `App` and return the next one plus an
//! optional effect for the boundary to execute. Nothing here blocks.

use super::state::{Action, App, AppEvent, Effect, StatusLine, EXIT_COMMAND};
use super::theme;

// ============================================================================
// USER ACTIONS
// ============================================================================

/// Apply a semantic user action to the model.
pub fn apply(mut app: App, action: &Action) -> (App, Option<Effect>) {
    match action {
        Action::Quit => {
            app.should_quit = true;
            (app, None)
        }
        Action::ClearInput => {
            app.input.reset();
            (app, None)
        }
        Action::Submit => submit(app),
        Action::Edit(op) => {
            app.input.apply(op);
            (app, None)
        }
    }
}

/// Submit the input buffer.
///
/// Gated on the busy flag: while a task is outstanding the submission is
/// ignored and the buffer is left untouched. Submitting the literal exit
/// command quits instead of starting a task. Empty input still starts a
/// task — the failure is reported when the task completes, like any
/// other result.
fn submit(mut app: App) -> (App, Option<Effect>) {
    if app.busy {
        return (app, None);
    }

    let payload = app.input.value().trim().to_string();
    app.input.reset();

    if payload == EXIT_COMMAND {
        app.should_quit = true;
        return (app, None);
    }

    app.busy = true;
    app.status = StatusLine::Working;
    app.spinner_frame = 0;
    (app, Some(Effect::StartTask { payload }))
}

// ============================================================================
// TIMER AND BACKGROUND EVENTS
// ============================================================================

/// Handle a non-key event from the channel.
///
/// `Key` events never reach this function — the loop routes them through
/// `map_key → apply` first.
pub fn handle_event(mut app: App, event: AppEvent) -> (App, Option<Effect>) {
    match event {
        AppEvent::Resize(width, height) => {
            app.width = width;
            app.height = height;
            (app, None)
        }
        AppEvent::Tick => {
            app.count += 1;
            (app, Some(Effect::ScheduleTick))
        }
        AppEvent::SpinnerTick => {
            if app.busy {
                app.spinner_frame = (app.spinner_frame + 1) % theme::SPINNER_FRAMES.len();
                (app, Some(Effect::ScheduleSpinner))
            } else {
                // Chain ends: no reschedule once the task has finished.
                (app, None)
            }
        }
        AppEvent::TaskDone(text) => {
            app.busy = false;
            app.response = text;
            app.status = StatusLine::Success;
            (app, None)
        }
        AppEvent::TaskFailed(message) => {
            app.busy = false;
            app.response = message;
            app.status = StatusLine::Failure;
            (app, None)
        }
        AppEvent::Key(_) => (app, None),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EditOp;

    fn typed(text: &str) -> App {
        let mut app = App::new();
        for c in text.chars() {
            let (next, effect) = apply(app, &Action::Edit(EditOp::Insert(c)));
            assert!(effect.is_none());
            app = next;
        }
        app
    }

    // -- Editing and clearing --

    #[test]
    fn typing_fills_the_input_buffer() {
        let app = typed("hello");
        assert_eq!(app.input.value(), "hello");
    }

    #[test]
    fn clear_empties_buffer_after_any_insert_sequence() {
        let app = typed("some arbitrary sequence");
        let (app, effect) = apply(app, &Action::ClearInput);
        assert!(app.input.is_empty());
        assert!(effect.is_none());
    }

    // -- Submission --

    #[test]
    fn submit_starts_task_and_clears_buffer() {
        let app = typed("hello");
        let (app, effect) = apply(app, &Action::Submit);
        assert!(app.busy);
        assert!(app.input.is_empty());
        assert_eq!(app.status, StatusLine::Working);
        assert_eq!(app.spinner_frame, 0);
        assert_eq!(
            effect,
            Some(Effect::StartTask {
                payload: "hello".to_string()
            })
        );
    }

    #[test]
    fn submit_trims_surrounding_whitespace() {
        let app = typed("  hello  ");
        let (_, effect) = apply(app, &Action::Submit);
        assert_eq!(
            effect,
            Some(Effect::StartTask {
                payload: "hello".to_string()
            })
        );
    }

    #[test]
    fn submit_whitespace_only_still_starts_a_task() {
        // The failure surfaces when the task completes, not at submit.
        let app = typed("   ");
        let (app, effect) = apply(app, &Action::Submit);
        assert!(app.busy);
        assert_eq!(
            effect,
            Some(Effect::StartTask {
                payload: String::new()
            })
        );
    }

    #[test]
    fn submit_while_busy_is_a_noop() {
        let mut app = typed("queued text");
        app.busy = true;
        app.status = StatusLine::Working;
        let (app, effect) = apply(app, &Action::Submit);
        assert!(app.busy);
        assert_eq!(app.input.value(), "queued text");
        assert_eq!(app.status, StatusLine::Working);
        assert!(effect.is_none());
    }

    #[test]
    fn submit_exit_command_quits_without_task() {
        let app = typed("/exit");
        let (app, effect) = apply(app, &Action::Submit);
        assert!(app.should_quit);
        assert!(!app.busy);
        assert!(effect.is_none());
    }

    #[test]
    fn submit_exit_command_with_whitespace_quits() {
        let app = typed("  /exit  ");
        let (app, _) = apply(app, &Action::Submit);
        assert!(app.should_quit);
    }

    // -- Quit --

    #[test]
    fn quit_action_works_from_idle() {
        let (app, effect) = apply(App::new(), &Action::Quit);
        assert!(app.should_quit);
        assert!(effect.is_none());
    }

    #[test]
    fn quit_action_works_while_busy() {
        let mut app = App::new();
        app.busy = true;
        let (app, _) = apply(app, &Action::Quit);
        assert!(app.should_quit);
    }

    // -- Resize --

    #[test]
    fn resize_stores_dimensions_and_nothing_else() {
        let before = typed("hello");
        let (app, effect) = handle_event(before.clone(), AppEvent::Resize(120, 40));
        assert_eq!((app.width, app.height), (120, 40));
        assert_eq!(app.input, before.input);
        assert_eq!(app.count, before.count);
        assert!(effect.is_none());
    }

    // -- Counter tick --

    #[test]
    fn tick_increments_counter_and_reschedules() {
        let (app, effect) = handle_event(App::new(), AppEvent::Tick);
        assert_eq!(app.count, 1);
        assert_eq!(effect, Some(Effect::ScheduleTick));
    }

    #[test]
    fn ticks_increment_strictly_by_one() {
        let mut app = App::new();
        for expected in 1..=10 {
            let (next, effect) = handle_event(app, AppEvent::Tick);
            assert_eq!(next.count, expected);
            assert_eq!(effect, Some(Effect::ScheduleTick));
            app = next;
        }
    }

    #[test]
    fn tick_keeps_rescheduling_while_busy() {
        let mut app = App::new();
        app.busy = true;
        let (_, effect) = handle_event(app, AppEvent::Tick);
        assert_eq!(effect, Some(Effect::ScheduleTick));
    }

    // -- Spinner tick --

    #[test]
    fn spinner_tick_advances_and_reschedules_while_busy() {
        let mut app = App::new();
        app.busy = true;
        let (app, effect) = handle_event(app, AppEvent::SpinnerTick);
        assert_eq!(app.spinner_frame, 1);
        assert_eq!(effect, Some(Effect::ScheduleSpinner));
    }

    #[test]
    fn spinner_frame_wraps_around_the_table() {
        let mut app = App::new();
        app.busy = true;
        app.spinner_frame = theme::SPINNER_FRAMES.len() - 1;
        let (app, _) = handle_event(app, AppEvent::SpinnerTick);
        assert_eq!(app.spinner_frame, 0);
    }

    #[test]
    fn spinner_tick_stops_rescheduling_once_idle() {
        let (app, effect) = handle_event(App::new(), AppEvent::SpinnerTick);
        assert_eq!(app.spinner_frame, 0);
        assert!(effect.is_none());
    }

    #[test]
    fn spinner_chain_ends_one_tick_after_busy_drops() {
        let mut app = App::new();
        app.busy = true;
        let (app, effect) = handle_event(app, AppEvent::SpinnerTick);
        assert_eq!(effect, Some(Effect::ScheduleSpinner));

        let (app, _) = handle_event(app, AppEvent::TaskDone("HELLO".into()));
        assert!(!app.busy);

        // The already-scheduled tick arrives, but is not rescheduled.
        let (_, effect) = handle_event(app, AppEvent::SpinnerTick);
        assert!(effect.is_none());
    }

    // -- Task results --

    #[test]
    fn task_done_clears_busy_and_records_result() {
        let mut app = App::new();
        app.busy = true;
        app.status = StatusLine::Working;
        let (app, effect) = handle_event(app, AppEvent::TaskDone("HELLO".into()));
        assert!(!app.busy);
        assert_eq!(app.response, "HELLO");
        assert_eq!(app.status, StatusLine::Success);
        assert!(effect.is_none());
    }

    #[test]
    fn task_failed_clears_busy_and_records_message() {
        let mut app = App::new();
        app.busy = true;
        let (app, effect) = handle_event(app, AppEvent::TaskFailed("input was empty".into()));
        assert!(!app.busy);
        assert_eq!(app.response, "input was empty");
        assert_eq!(app.status, StatusLine::Failure);
        assert!(effect.is_none());
    }

    #[test]
    fn any_result_clears_busy_even_from_idle() {
        // Defensive property: results always leave the app idle.
        let (app, _) = handle_event(App::new(), AppEvent::TaskDone("X".into()));
        assert!(!app.busy);
        let (app, _) = handle_event(app, AppEvent::TaskFailed("Y".into()));
        assert!(!app.busy);
    }

    #[test]
    fn resubmission_is_accepted_after_a_result() {
        let app = typed("first");
        let (app, _) = apply(app, &Action::Submit);
        let (app, _) = handle_event(app, AppEvent::TaskDone("FIRST".into()));

        let mut app = app;
        for c in "second".chars() {
            app = apply(app, &Action::Edit(EditOp::Insert(c))).0;
        }
        let (app, effect) = apply(app, &Action::Submit);
        assert!(app.busy);
        assert_eq!(
            effect,
            Some(Effect::StartTask {
                payload: "second".to_string()
            })
        );
    }
}
