//! Notation pane
//!
//! Shows the notation string hard-wrapped to the pane width, scrolled so the
//! newest input is always visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

const BORDER_SIZE: u16 = 2;

/// Split `text` into rows of `width` characters and keep the last `height`.
pub fn tail_lines(text: &str, width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let rows: Vec<String> = chars.chunks(width).map(|row| row.iter().collect()).collect();
    let skip = rows.len().saturating_sub(height);
    rows.into_iter().skip(skip).collect()
}

/// Render the notation pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Notation ");

    let lines: Vec<Line> = if app.notation().is_empty() {
        vec![Line::from(Span::styled(
            "Press a bound key to start",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let width = area.width.saturating_sub(BORDER_SIZE) as usize;
        let height = area.height.saturating_sub(BORDER_SIZE) as usize;
        tail_lines(app.notation(), width, height).into_iter().map(Line::from).collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_row() {
        assert_eq!(tail_lines("2-3-66P", 20, 4), vec!["2-3-66P"]);
    }

    #[test]
    fn wraps_and_keeps_tail() {
        let rows = tail_lines("5P5K5S5H5D", 4, 2);
        assert_eq!(rows, vec!["5S5H", "5D"]);
    }

    #[test]
    fn degenerate_area() {
        assert!(tail_lines("5P", 0, 3).is_empty());
        assert!(tail_lines("5P", 3, 0).is_empty());
        assert!(tail_lines("", 3, 3).is_empty());
    }
}
