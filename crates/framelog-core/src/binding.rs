//! Physical key to logical button bindings.
//!
//! Every logical button is bound to exactly one physical key, and a physical
//! key drives at most one logical button. [`KeyBindings`] enforces both when
//! it is built, so lookups never have to resolve ambiguity.

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::LogicalButton;

/// Name of a physical key as reported by the capture source.
///
/// Character keys are lower-case (`"a"`, `";"`), the space bar is `"Space"`,
/// arrows are `"ArrowUp"` etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhysicalKey(String);

impl PhysicalKey {
    /// Wrap a key name verbatim.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Key name for a typed character.
    pub fn from_char(c: char) -> Self {
        if c == ' ' { Self::new("Space") } else { Self(c.to_lowercase().collect()) }
    }

    /// Key name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhysicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhysicalKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Errors building a binding table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// Logical button has no physical key.
    #[error("no key bound to {0}")]
    Unbound(LogicalButton),

    /// Physical key name is empty.
    #[error("empty key name for {0}")]
    EmptyKey(LogicalButton),

    /// Same physical key bound to two logical buttons.
    #[error("key '{key}' bound to both {first} and {second}")]
    DuplicateKey {
        /// Physical key bound twice
        key: PhysicalKey,
        /// Button that claimed the key first
        first: LogicalButton,
        /// Button that tried to claim it again
        second: LogicalButton,
    },
}

/// Validated one-to-one binding table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<LogicalButton, PhysicalKey>",
    into = "BTreeMap<LogicalButton, PhysicalKey>"
)]
pub struct KeyBindings {
    /// Physical key per button, indexed by [`LogicalButton::index`].
    keys: Vec<PhysicalKey>,
    /// Reverse lookup.
    by_key: HashMap<PhysicalKey, LogicalButton>,
}

impl KeyBindings {
    /// Build a table from `(button, key)` pairs.
    ///
    /// Every button must appear exactly once with a non-empty key, and no key
    /// may be shared. Later pairs for the same button replace earlier ones.
    pub fn new(
        pairs: impl IntoIterator<Item = (LogicalButton, PhysicalKey)>,
    ) -> Result<Self, BindingError> {
        let mut slots: Vec<Option<PhysicalKey>> = vec![None; LogicalButton::COUNT];
        for (button, key) in pairs {
            if key.as_str().is_empty() {
                return Err(BindingError::EmptyKey(button));
            }
            slots[button.index()] = Some(key);
        }

        let mut keys = Vec::with_capacity(LogicalButton::COUNT);
        let mut by_key = HashMap::with_capacity(LogicalButton::COUNT);
        for (button, slot) in LogicalButton::ALL.into_iter().zip(slots) {
            let key = slot.ok_or(BindingError::Unbound(button))?;
            if let Some(&first) = by_key.get(&key) {
                return Err(BindingError::DuplicateKey { key, first, second: button });
            }
            by_key.insert(key.clone(), button);
            keys.push(key);
        }

        Ok(Self { keys, by_key })
    }

    /// Logical button driven by `key`, if any.
    pub fn lookup(&self, key: &PhysicalKey) -> Option<LogicalButton> {
        self.by_key.get(key).copied()
    }

    /// Physical key bound to `button`.
    pub fn key_for(&self, button: LogicalButton) -> &PhysicalKey {
        &self.keys[button.index()]
    }

    /// Whether `key` drives any button.
    pub fn is_bound(&self, key: &PhysicalKey) -> bool {
        self.by_key.contains_key(key)
    }

    /// `(button, key)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalButton, &PhysicalKey)> {
        LogicalButton::ALL.into_iter().zip(self.keys.iter())
    }
}

impl Default for KeyBindings {
    /// Home-row layout: `a`/`s`/`d` + space for directions, `u j i k o l` for
    /// actions, `;` for dash.
    fn default() -> Self {
        let keys = [
            "Space", // Up
            "s",     // Down
            "a",     // Left
            "d",     // Right
            "u",     // Punch
            "j",     // Kick
            "i",     // Slash
            "k",     // Heavy slash
            "o",     // Dust
            "l",     // Special cancel
            ";",     // Dash
        ];
        let by_key: HashMap<PhysicalKey, LogicalButton> =
            LogicalButton::ALL.into_iter().zip(keys).map(|(b, k)| (PhysicalKey::from(k), b)).collect();
        Self { keys: keys.into_iter().map(PhysicalKey::from).collect(), by_key }
    }
}

impl TryFrom<BTreeMap<LogicalButton, PhysicalKey>> for KeyBindings {
    type Error = BindingError;

    fn try_from(map: BTreeMap<LogicalButton, PhysicalKey>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<KeyBindings> for BTreeMap<LogicalButton, PhysicalKey> {
    fn from(bindings: KeyBindings) -> Self {
        LogicalButton::ALL.into_iter().zip(bindings.keys).collect()
    }
}
