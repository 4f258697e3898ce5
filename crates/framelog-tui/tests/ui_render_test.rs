//! Render tests against ratatui's in-memory backend.

#![allow(clippy::unwrap_used)]

use framelog_app::{App, AppEvent, KeyInput, Keymap};
use framelog_tui::ui;
use ratatui::{Terminal, backend::TestBackend, buffer::Cell};

/// Render `app` and return the screen as one string per row.
fn screen(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(width))
        .map(|row| row.iter().map(Cell::symbol).collect())
        .collect()
}

fn press_all(app: &mut App, keys: &[&str]) {
    for (i, key) in keys.iter().enumerate() {
        let timestamp_ms = i as u64 * 100;
        app.handle(AppEvent::Key { input: KeyInput::down(*key), timestamp_ms });
        app.handle(AppEvent::Key { input: KeyInput::up(*key), timestamp_ms: timestamp_ms + 50 });
    }
}

#[test]
fn empty_log_shows_placeholder() {
    let app = App::new(Keymap::default());
    let rows = screen(&app, 40, 5);

    assert!(rows[0].contains("Notation"));
    assert!(rows[1].contains("Press a bound key"));
    assert!(rows[4].contains("Frame 0"));
    assert!(rows[4].contains("c clear"));
}

#[test]
fn notation_is_drawn() {
    let mut app = App::new(Keymap::default());
    press_all(&mut app, &["s", "u"]);

    let rows = screen(&app, 40, 5);
    assert!(rows[1].contains(app.notation()), "{rows:?}");
}

#[test]
fn long_notation_scrolls_to_tail() {
    let mut app = App::new(Keymap::default());
    let keys = ["u", "j", "i", "k", "o", "l"].repeat(4);
    press_all(&mut app, &keys);

    // 12 columns inside the border, 2 rows visible
    let rows = screen(&app, 14, 5);
    let tail = ui::tail_lines(app.notation(), 12, 2);
    assert_eq!(tail.len(), 2);
    assert!(rows[1].contains(&tail[0]), "{rows:?}");
    assert!(rows[2].contains(&tail[1]), "{rows:?}");
    assert!(app.notation().ends_with(&tail[1]));
}

#[test]
fn status_message_is_shown() {
    let mut app = App::new(Keymap::default());
    app.set_status("no key release events");

    let rows = screen(&app, 80, 4);
    assert!(rows[3].contains("no key release events"));
}
