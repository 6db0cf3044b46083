//! UI rendering for inflight
//!
//! Layout:
//! - Header: title and the loading indicator
//! - Left panel: fetched users
//! - Right panel: request log, newest first
//! - Bottom: last error or keybind hints

pub mod loading_indicator;
pub mod theme;

pub use loading_indicator::{get_spinner_char, next_spinner_frame, render_loading_indicator};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::{RequestOutcome, RequestRecord};
use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CANCELLED, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_PENDING, COLOR_SUCCESS,
};

/// Keybind hints shown in the footer
const KEYBINDS: &[(&str, &str)] = &[
    ("c", "call"),
    ("x", "cancel"),
    ("X", "cancel all"),
    ("d", "clear"),
    ("q", "quit"),
];

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = outer_block.inner(size);
    frame.render_widget(outer_block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Panels
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    render_header(frame, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_users(frame, panels[0], app);
    render_requests(frame, panels[1], app);

    render_footer(frame, chunks[2], app);
}

// ============================================================================
// Header Section
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " inflight ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];

    match render_loading_indicator(app.is_loading, app.spinner_frame, app.pending_count()) {
        Some(indicator) => {
            spans.push(Span::raw(" "));
            spans.extend(indicator.spans);
        }
        None => spans.push(Span::styled(" idle", Style::default().fg(COLOR_DIM))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Panels
// ============================================================================

fn panel_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(title, Style::default().fg(COLOR_ACCENT)))
}

fn render_users(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(format!(" Users ({}) ", app.users.len()));

    if app.users.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Press c to fetch a user",
            Style::default().fg(COLOR_DIM),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    // Newest at the bottom, keep the tail visible
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.users.len().saturating_sub(visible);
    let items: Vec<ListItem> = app
        .users
        .iter()
        .skip(skip)
        .map(|user| {
            let mut spans = vec![Span::raw(user.summary())];
            if !user.company.name.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", user.company.name),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_requests(frame: &mut Frame, area: Rect, app: &App) {
    let block = panel_block(" Requests ".to_string());
    let items: Vec<ListItem> = app
        .requests
        .iter()
        .rev()
        .map(|record| ListItem::new(request_line(record)))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// One request log line: time, user id, outcome and duration.
pub fn request_line(record: &RequestRecord) -> Line<'static> {
    let color = match record.outcome {
        RequestOutcome::Pending => COLOR_PENDING,
        RequestOutcome::Loaded => COLOR_SUCCESS,
        RequestOutcome::Failed(_) => COLOR_ERROR,
        RequestOutcome::Cancelled => COLOR_CANCELLED,
    };

    let mut spans = vec![
        Span::styled(
            record.issued_at.format("%H:%M:%S ").to_string(),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw(format!("user {:>2} ", record.user_id)),
        Span::styled(record.outcome.label(), Style::default().fg(color)),
    ];
    if let Some(ms) = record.elapsed_ms() {
        spans.push(Span::styled(
            format!(" {}ms", ms),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}

// ============================================================================
// Footer
// ============================================================================

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.last_error {
        Some(error) => Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(COLOR_ERROR),
        )),
        None => {
            let mut spans = Vec::with_capacity(KEYBINDS.len() * 2);
            for (key, label) in KEYBINDS {
                spans.push(Span::styled(
                    format!(" {}", key),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!(" {} ", label),
                    Style::default().fg(COLOR_DIM),
                ));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
