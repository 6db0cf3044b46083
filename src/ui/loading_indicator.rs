//! Loading Indicator Component
//!
//! Projects the tracker's loading flag into a spinner line. It holds no
//! state of its own: the app advances the frame on each tick and passes the
//! current flag in.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_LOADING};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Advance the spinner frame
pub fn next_spinner_frame(current: usize) -> usize {
    (current + 1) % SPINNER_FRAMES.len()
}

/// Render the indicator line, or `None` while idle.
///
/// `pending` is the number of requests the app is waiting on; it is shown
/// only when non-zero, since requests made outside the app also count as
/// loading.
pub fn render_loading_indicator(
    is_loading: bool,
    frame: usize,
    pending: usize,
) -> Option<Line<'static>> {
    if !is_loading {
        return None;
    }

    let mut spans = vec![
        Span::styled(
            format!("{} ", get_spinner_char(frame)),
            Style::default().fg(COLOR_LOADING),
        ),
        Span::styled(
            "Loading…",
            Style::default()
                .fg(COLOR_LOADING)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if pending > 0 {
        spans.push(Span::styled(
            format!(" ({} pending)", pending),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Some(Line::from(spans))
}
