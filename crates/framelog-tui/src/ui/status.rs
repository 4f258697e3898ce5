//! Status bar
//!
//! Displays the frame counter, key hints, and the status message.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let frame_info = Span::styled(
        format!("Frame {}", app.frame_count()),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    );

    let hints = format!(" | {} clear | Esc quit", app.keymap().clear_key());

    let mut spans = vec![Span::raw(" "), frame_info, Span::raw(hints)];
    if app.flush_on_tick() {
        spans.push(Span::raw(" | tick flush"));
    }
    if let Some(message) = app.status_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(message.to_string(), Style::default().fg(Color::Yellow)));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
