//! Terminal-agnostic key edges.

use framelog_core::{Edge, PhysicalKey};

/// One key transition as reported by a frontend.
///
/// Decouples the application from terminal libraries so the same [`crate::App`]
/// runs under crossterm and under scripted tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Physical key name.
    pub key: PhysicalKey,
    /// Transition kind.
    pub edge: Edge,
}

impl KeyInput {
    /// Key went down.
    pub fn down(key: impl Into<PhysicalKey>) -> Self {
        Self { key: key.into(), edge: Edge::Down }
    }

    /// Key went up.
    pub fn up(key: impl Into<PhysicalKey>) -> Self {
        Self { key: key.into(), edge: Edge::Up }
    }

    /// Auto-repeat while held.
    pub fn repeat(key: impl Into<PhysicalKey>) -> Self {
        Self { key: key.into(), edge: Edge::Repeat }
    }
}
