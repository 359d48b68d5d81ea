//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: every producer feeds a single mpsc channel.
//! - Terminal reader thread: forwards key and resize events
//! - One-shot timer threads: post counter and spinner ticks
//! - Worker thread: posts exactly one task result per submission
//! The event loop consumes from the channel one event at a time and
//! redraws after every transition, so each frame sees fully updated
//! state and no two transitions ever overlap.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::input::EditOp;
use crate::task;

use super::state::{Action, App, AppEvent, Effect};
use super::update::{apply, handle_event};
use super::view::render;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Timing knobs for the event loop, set from the CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Interval between counter ticks.
    pub tick_interval: Duration,
    /// Interval between spinner animation frames.
    pub spinner_interval: Duration,
    /// Simulated latency of the background task.
    pub task_latency: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            tick_interval: Duration::from_millis(1000),
            spinner_interval: Duration::from_millis(100),
            task_latency: Duration::from_millis(2000),
        }
    }
}

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits, even mid-task
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Action::ClearInput),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Edit(EditOp::Backspace)),
        KeyCode::Delete => Some(Action::Edit(EditOp::Delete)),
        KeyCode::Left => Some(Action::Edit(EditOp::Left)),
        KeyCode::Right => Some(Action::Edit(EditOp::Right)),
        KeyCode::Home => Some(Action::Edit(EditOp::Home)),
        KeyCode::End => Some(Action::Edit(EditOp::End)),
        KeyCode::Char(c) => Some(Action::Edit(EditOp::Insert(c))),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// PRODUCER THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards keys and resizes.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    if tx.send(AppEvent::Resize(width, height)).is_err() {
                        break;
                    }
                }
                Ok(_) => {} // ignore mouse, focus, paste
                Err(_) => break,
            }
        }
    });
}

/// Spawn a thread that runs the task after the simulated latency and
/// posts exactly one result event.
fn spawn_worker(payload: String, latency: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(latency);
        let result = match task::execute(&payload) {
            Ok(text) => AppEvent::TaskDone(text),
            Err(e) => AppEvent::TaskFailed(e.to_string()),
        };
        // Best-effort: the loop may already have shut down
        let _ = tx.send(result);
    });
}

/// Post one event after a delay. Each tick chain re-posts itself through
/// an effect, so no thread ever holds state or runs longer than one delay.
fn schedule(delay: Duration, event: AppEvent, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(event);
    });
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a pure transition.
fn handle_effect(effect: Effect, config: &RunConfig, tx: &mpsc::Sender<AppEvent>) {
    match effect {
        Effect::StartTask { payload } => {
            // One worker plus the first spinner tick; the spinner chain
            // then re-posts itself while the app stays busy.
            spawn_worker(payload, config.task_latency, tx.clone());
            schedule(config.spinner_interval, AppEvent::SpinnerTick, tx.clone());
        }
        Effect::ScheduleTick => {
            schedule(config.tick_interval, AppEvent::Tick, tx.clone());
        }
        Effect::ScheduleSpinner => {
            schedule(config.spinner_interval, AppEvent::SpinnerTick, tx.clone());
        }
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// Sets up the terminal, starts the producers, then renders after every
/// transition. Terminal setup failure is the only fatal error; it
/// propagates to main before the loop starts.
pub fn run(config: RunConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx.clone());

    let (mut app, initial) = App::init();
    handle_effect(initial, &config, &tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on the next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let (next, effect) = match event {
            AppEvent::Key(key) => match map_key(key) {
                Some(action) => apply(app, &action),
                None => (app, None),
            },
            other => handle_event(app, other),
        };
        app = next;

        if let Some(effect) = effect {
            handle_effect(effect, &config, &tx);
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
