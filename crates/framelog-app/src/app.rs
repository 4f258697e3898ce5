//! Application state machine.
//!
//! This module defines the [`App`] state machine, which routes key edges into
//! the [`NotationEncoder`] and tracks what the frontend needs to draw.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Maps physical keys to logical buttons through the [`Keymap`].
//! - Handles the clear key and explicit clear requests.
//! - Runs the frame boundary check on ticks when timer flush is enabled.
//! - Stores a transient status message.

use framelog_core::{Edge, NotationEncoder};

use crate::{AppAction, AppEvent, KeyInput, Keymap};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable with scripted events.
#[derive(Debug, Clone)]
pub struct App {
    /// Physical key bindings.
    keymap: Keymap,
    /// Notation state.
    encoder: NotationEncoder,
    /// Current display string, cached to detect changes.
    notation: String,
    /// Whether ticks run the boundary check.
    flush_on_tick: bool,
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App with the given keymap.
    pub fn new(keymap: Keymap) -> Self {
        Self {
            keymap,
            encoder: NotationEncoder::new(),
            notation: String::new(),
            flush_on_tick: false,
            status_message: None,
        }
    }

    /// Enable or disable the boundary check on [`AppEvent::Tick`].
    #[must_use]
    pub fn with_flush_on_tick(mut self, enabled: bool) -> Self {
        self.flush_on_tick = enabled;
        self
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key { input, timestamp_ms } => self.handle_key(input, timestamp_ms),
            AppEvent::Clear => self.clear(),
            AppEvent::Tick { timestamp_ms } => {
                if !self.flush_on_tick {
                    return vec![];
                }
                let display = self.encoder.poll(timestamp_ms);
                self.update_notation(display)
            },
            AppEvent::Resize(..) => vec![AppAction::Render],
            AppEvent::Quit => self.quit(),
        }
    }

    fn handle_key(&mut self, input: KeyInput, timestamp_ms: u64) -> Vec<AppAction> {
        if self.keymap.is_clear(&input.key) {
            return match input.edge {
                Edge::Down => self.clear(),
                Edge::Up | Edge::Repeat => vec![],
            };
        }

        let Some(button) = self.keymap.button_for(&input.key) else {
            tracing::trace!(key = %input.key, "unbound key");
            return vec![];
        };

        let display = self.encoder.handle_event(button, input.edge, timestamp_ms);
        self.update_notation(display)
    }

    /// Store a new display string. Render only if it changed.
    fn update_notation(&mut self, display: String) -> Vec<AppAction> {
        if display == self.notation {
            return vec![];
        }
        self.notation = display;
        vec![AppAction::Render]
    }

    /// Reset the notation log.
    pub fn clear(&mut self) -> Vec<AppAction> {
        self.notation = self.encoder.clear();
        tracing::debug!("notation cleared");
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Current notation display string.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Frame index of the open frame.
    pub fn frame_count(&self) -> u64 {
        self.encoder.frame_count()
    }

    /// Encoder state.
    pub fn encoder(&self) -> &NotationEncoder {
        &self.encoder
    }

    /// Key bindings.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Whether ticks run the boundary check.
    pub fn flush_on_tick(&self) -> bool {
        self.flush_on_tick
    }

    /// Transient status message, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
