//! Application layer for framelog
//!
//! Pure state machine and generic runtime wrapping the notation encoder,
//! so the loop that runs in the terminal also runs under scripted tests.
//!
//! # Components
//!
//! - [`App`]: state machine (key routing, clear, timer flush, status)
//! - [`Keymap`]: physical key bindings loaded from JSON
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod keymap;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use keymap::{ConfigError, Keymap};
pub use runtime::Runtime;
