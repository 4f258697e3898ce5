//! Core of the framelog input notation.
//!
//! Converts timestamped key edges into fighting-game numpad notation
//! quantized to 60 frames per second, e.g. `2==2K>-6P`. Pure state machines
//! with no I/O: callers feed edges and timestamps, and read back a string.
//!
//! # Components
//!
//! - [`FrameClock`]: wall-clock milliseconds to logical frame counter
//! - [`KeyState`] / [`KeyRegistry`]: per-button sticky latch, direction digit
//!   and action symbols
//! - [`format_gap`]: run-length glyphs for frame gaps between tokens
//! - [`NotationEncoder`]: drives the above on every edge and boundary check
//! - [`KeyBindings`]: validated physical key to [`LogicalButton`] table

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod binding;
mod button;
mod clock;
mod encoder;
mod gap;
mod key_state;
mod registry;

pub use binding::{BindingError, KeyBindings, PhysicalKey};
pub use button::{Edge, Level, LogicalButton};
pub use clock::{FRAMES_PER_SECOND, FrameClock, frame_index};
pub use encoder::NotationEncoder;
pub use gap::{MAX_GLYPH_GAP, format_gap};
pub use key_state::KeyState;
pub use registry::{KeyRegistry, NEUTRAL_DIRECTION};
