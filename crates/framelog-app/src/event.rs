//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Events come from the frontend: key edges,
//! timer ticks, resizes, and explicit commands.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Key edge.
    Key {
        /// Key and transition.
        input: KeyInput,
        /// Milliseconds on the frontend's monotonic clock.
        timestamp_ms: u64,
    },

    /// Reset the notation log.
    Clear,

    /// Periodic tick.
    Tick {
        /// Milliseconds on the frontend's monotonic clock.
        timestamp_ms: u64,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Quit requested.
    Quit,
}
