//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod notation;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

pub use notation::tail_lines;

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    const NOTATION_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(NOTATION_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [notation_area, status_area] = chunks.as_ref() else {
        return;
    };

    notation::render(frame, app, *notation_area);
    status::render(frame, app, *status_area);
}
