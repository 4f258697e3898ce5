//! Keymap file.
//!
//! A keymap binds every logical button to a physical key and names one extra
//! key that clears the log. It is stored as JSON:
//!
//! ```json
//! {
//!   "buttons": { "up": "Space", "down": "s", "punch": "u", ... },
//!   "clear": "c"
//! }
//! ```
//!
//! A missing file means the built-in layout.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use framelog_core::{KeyBindings, LogicalButton, PhysicalKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors loading or validating a keymap.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written.
    #[error("keymap {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// File is not a valid keymap.
    #[error("invalid keymap {path}: {source}")]
    Parse {
        /// File involved
        path: PathBuf,
        /// Decoder error, including binding violations
        #[source]
        source: serde_json::Error,
    },

    /// Clear key also drives a button.
    #[error("clear key '{key}' is also bound to {button}")]
    ClearKeyBound {
        /// Clear key
        key: PhysicalKey,
        /// Button it collides with
        button: LogicalButton,
    },
}

/// Validated key bindings plus the clear key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeymapFile", into = "KeymapFile")]
pub struct Keymap {
    buttons: KeyBindings,
    clear: PhysicalKey,
}

/// On-disk shape, before validation.
#[derive(Serialize, Deserialize)]
struct KeymapFile {
    buttons: KeyBindings,
    #[serde(default = "default_clear_key")]
    clear: PhysicalKey,
}

fn default_clear_key() -> PhysicalKey {
    PhysicalKey::new("c")
}

impl Keymap {
    /// Combine a binding table with a clear key.
    pub fn new(buttons: KeyBindings, clear: PhysicalKey) -> Result<Self, ConfigError> {
        if let Some(button) = buttons.lookup(&clear) {
            return Err(ConfigError::ClearKeyBound { key: clear, button });
        }
        Ok(Self { buttons, clear })
    }

    /// Load a keymap from `path`, or the default if the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "keymap not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let keymap = serde_json::from_str(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::info!(path = %path.display(), "loaded keymap");
        Ok(keymap)
    }

    /// Write this keymap to `path` as pretty JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        fs::write(path, content)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
    }

    /// Logical button driven by `key`, if any.
    pub fn button_for(&self, key: &PhysicalKey) -> Option<LogicalButton> {
        self.buttons.lookup(key)
    }

    /// Whether `key` is the clear key.
    pub fn is_clear(&self, key: &PhysicalKey) -> bool {
        *key == self.clear
    }

    /// Button bindings.
    pub fn buttons(&self) -> &KeyBindings {
        &self.buttons
    }

    /// Clear key.
    pub fn clear_key(&self) -> &PhysicalKey {
        &self.clear
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self { buttons: KeyBindings::default(), clear: default_clear_key() }
    }
}

impl TryFrom<KeymapFile> for Keymap {
    type Error = ConfigError;

    fn try_from(file: KeymapFile) -> Result<Self, Self::Error> {
        Self::new(file.buttons, file.clear)
    }
}

impl From<Keymap> for KeymapFile {
    fn from(keymap: Keymap) -> Self {
        Self { buttons: keymap.buttons, clear: keymap.clear }
    }
}
