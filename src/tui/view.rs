//! Pure rendering: map the App model to ratatui widgets.
//!
//! Fixed vertical order: title, message area (fills remaining space),
//! busy line, status line, bordered input field, help line. Widget
//! building is pure (state in, widgets out); the only effect is
//! `Frame::render_widget()` writing to the terminal buffer.
//!
//! All derived sizes are floored by the layout constraints, so a
//! degenerate terminal (0x0 after a resize) renders without panicking.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::state::{App, StatusLine};
use super::theme;

/// Horizontal padding columns on each side of the content.
const PAD_X: u16 = 2;

const TITLE: &str = "promptline";
const HELP: &str = "Enter: run async task   Esc: clear   /exit: quit";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the full frame from the current model.
pub fn render(app: &App, frame: &mut Frame) {
    let content = pad_horizontal(frame.area());

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(1),    // message area
        Constraint::Length(1), // busy line
        Constraint::Length(1), // status
        Constraint::Length(3), // input field (bordered)
        Constraint::Length(1), // help
    ])
    .split(content);

    frame.render_widget(render_title(), chunks[0]);
    frame.render_widget(render_messages(app), chunks[1]);
    frame.render_widget(render_busy_line(app), chunks[2]);
    frame.render_widget(render_status(app), chunks[3]);
    render_input(app, frame, chunks[4]);
    frame.render_widget(render_help(), chunks[5]);
}

/// Content area: total width minus fixed padding, never below one column.
fn pad_horizontal(area: Rect) -> Rect {
    let chunks = Layout::horizontal([
        Constraint::Length(PAD_X),
        Constraint::Min(1),
        Constraint::Length(PAD_X),
    ])
    .split(area);
    chunks[1]
}

// ============================================================================
// SECTIONS
// ============================================================================

fn render_title() -> Paragraph<'static> {
    Paragraph::new(Span::styled(TITLE, theme::STYLE_TITLE))
}

/// Counter plus the last task result.
fn render_messages(app: &App) -> Paragraph<'_> {
    let mut lines = vec![
        Line::from(""),
        Line::from(format!("Count: {}", app.count)),
    ];
    if !app.response.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(app.response.as_str()));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Spinner plus "Processing..." while busy, an empty line otherwise.
fn render_busy_line(app: &App) -> Paragraph<'static> {
    if app.busy {
        let frame_glyph = theme::SPINNER_FRAMES[app.spinner_frame % theme::SPINNER_FRAMES.len()];
        Paragraph::new(Span::styled(
            format!("{frame_glyph}  Processing..."),
            theme::STYLE_SPINNER,
        ))
    } else {
        Paragraph::new("")
    }
}

fn render_status(app: &App) -> Paragraph<'static> {
    let (text, style) = match app.status {
        StatusLine::Empty => ("", theme::STYLE_HELP),
        StatusLine::Working => ("Working...", theme::STYLE_WORKING),
        StatusLine::Success => ("Done!", theme::STYLE_SUCCESS),
        StatusLine::Failure => ("Done with error!", theme::STYLE_FAILURE),
    };
    Paragraph::new(Span::styled(text, style))
}

/// Bordered input field with placeholder and caret positioning.
fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::bordered().border_style(theme::STYLE_INPUT_BORDER);
    let inner = block.inner(area);

    let content = if app.input.is_empty() {
        Span::styled(app.input.placeholder(), theme::STYLE_PLACEHOLDER)
    } else {
        Span::raw(app.input.value())
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let max_x = inner.x + inner.width - 1;
        let cursor_x = inner.x.saturating_add(app.input.cursor() as u16).min(max_x);
        frame.set_cursor_position(Position::new(cursor_x, inner.y));
    }
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(HELP, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================
