//! Terminal UI for framelog
//!
//! A thin shell over [`framelog_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`framelog_app::Runtime`].
//!
//! This crate only handles key capture and terminal rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use framelog_app::{App, AppAction, AppEvent, Driver, KeyInput, Keymap, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
