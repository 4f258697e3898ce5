//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide input and
//! rendering, while the generic [`crate::Runtime`] handles orchestration.

use std::future::Future;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// # Implementations
///
/// - **TUI**: crossterm key events, ratatui rendering
/// - **Tests**: a scripted queue of events and a render counter
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the input source is exhausted.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release platform resources.
    fn stop(&mut self);
}
