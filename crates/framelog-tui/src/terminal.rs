//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.
//!
//! Key releases are only reported by terminals that support the keyboard
//! enhancement protocol. Without it every key stays held once pressed, so the
//! driver exposes [`TerminalDriver::keyboard_enhanced`] for the caller to warn.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{
        Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use framelog_app::{App, AppEvent, Driver, KeyInput};
use framelog_core::{Edge, PhysicalKey};
use futures::{Stream, StreamExt};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::time::{Instant, Interval, MissedTickBehavior};

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns the terminal for its whole lifetime: raw mode, alternate screen and
/// keyboard enhancement flags are undone by [`Driver::stop`] or on drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    /// Origin of event timestamps.
    start: Instant,
    /// Tick timer. `None` disables ticks.
    tick: Option<Interval>,
    keyboard_enhanced: bool,
    restored: bool,
}

impl TerminalDriver {
    /// Take over the terminal. Ticks are emitted every `tick` if set and
    /// non-zero.
    ///
    /// Must be called inside a Tokio runtime when `tick` is set.
    pub fn new(tick: Option<Duration>) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
        let mut out = stdout();
        out.execute(EnterAlternateScreen)?;
        if keyboard_enhanced {
            out.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        tracing::debug!(keyboard_enhanced, ?tick, "terminal ready");

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            event_stream: EventStream::new(),
            start: Instant::now(),
            tick: tick.filter(|period| !period.is_zero()).map(tick_interval),
            keyboard_enhanced,
            restored: false,
        })
    }

    /// Whether the terminal reports key release events.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        let mut out = stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = disable_raw_mode();
        let _ = out.execute(LeaveAlternateScreen);
    }
}

/// Timer firing every `period`, first one `period` from now.
///
/// Late ticks push the schedule back instead of bursting to catch up.
fn tick_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Milliseconds since `start`.
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Name of a bindable key. `None` for keys that cannot be bound.
pub fn physical_key(code: KeyCode) -> Option<PhysicalKey> {
    match code {
        KeyCode::Char(c) => Some(PhysicalKey::from_char(c)),
        KeyCode::Up => Some(PhysicalKey::new("ArrowUp")),
        KeyCode::Down => Some(PhysicalKey::new("ArrowDown")),
        KeyCode::Left => Some(PhysicalKey::new("ArrowLeft")),
        KeyCode::Right => Some(PhysicalKey::new("ArrowRight")),
        _ => None,
    }
}

/// Convert a crossterm key kind to an edge.
pub fn edge(kind: KeyEventKind) -> Edge {
    match kind {
        KeyEventKind::Press => Edge::Down,
        KeyEventKind::Release => Edge::Up,
        KeyEventKind::Repeat => Edge::Repeat,
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Convert a crossterm event to an [`AppEvent`].
///
/// Returns `None` for events the app does not handle.
pub fn convert_event(event: &Event, timestamp_ms: u64) -> Option<AppEvent> {
    match event {
        Event::Key(key) if is_quit(key) => {
            (key.kind == KeyEventKind::Press).then_some(AppEvent::Quit)
        },
        Event::Key(key) => {
            let input = KeyInput { key: physical_key(key.code)?, edge: edge(key.kind) };
            Some(AppEvent::Key { input, timestamp_ms })
        },
        Event::Resize(cols, rows) => Some(AppEvent::Resize(*cols, *rows)),
        _ => None,
    }
}

/// Wait for the next app event from `events`, or a tick from `tick`.
///
/// Terminal events the app ignores are skipped without delaying the tick
/// schedule. Returns `Ok(None)` once `events` ends.
async fn next_event<S>(
    events: &mut S,
    mut tick: Option<&mut Interval>,
    start: Instant,
) -> Result<Option<AppEvent>, TerminalError>
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    loop {
        let maybe_event = match tick.as_deref_mut() {
            Some(interval) => tokio::select! {
                biased;

                // Terminal events
                maybe_event = events.next() => maybe_event,

                // Periodic tick
                _ = interval.tick() => {
                    return Ok(Some(AppEvent::Tick { timestamp_ms: elapsed_ms(start) }));
                }
            },
            None => events.next().await,
        };

        match maybe_event {
            Some(Ok(event)) => {
                if let Some(app_event) = convert_event(&event, elapsed_ms(start)) {
                    return Ok(Some(app_event));
                }
            },
            Some(Err(e)) => return Err(TerminalError::Io(e)),
            None => return Ok(None),
        }
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        next_event(&mut self.event_stream, self.tick.as_mut(), self.start).await
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
