//! Logical buttons and input edges.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Abstract input channel, independent of which physical key drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalButton {
    /// Up direction (jump).
    Up,
    /// Down direction (crouch).
    Down,
    /// Left direction.
    Left,
    /// Right direction.
    Right,
    /// Punch (`P`).
    Punch,
    /// Kick (`K`).
    Kick,
    /// Slash (`S`).
    Slash,
    /// Heavy slash (`H`).
    HeavySlash,
    /// Dust (`D`).
    Dust,
    /// Special cancel (`C`).
    #[serde(alias = "roman_cancel")]
    SpecialCancel,
    /// Dash macro (`dash`).
    Dash,
}

impl LogicalButton {
    /// Number of logical buttons.
    pub const COUNT: usize = 11;

    /// Every button, in registry order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::Punch,
        Self::Kick,
        Self::Slash,
        Self::HeavySlash,
        Self::Dust,
        Self::SpecialCancel,
        Self::Dash,
    ];

    /// Action buttons with their notation symbols, in output order.
    pub const ACTIONS: [(Self, &'static str); 7] = [
        (Self::Punch, "P"),
        (Self::Kick, "K"),
        (Self::Slash, "S"),
        (Self::HeavySlash, "H"),
        (Self::Dust, "D"),
        (Self::SpecialCancel, "C"),
        (Self::Dash, "dash"),
    ];

    /// Position of this button in [`LogicalButton::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the four directions.
    pub fn is_direction(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }

    /// Configuration name (`heavy_slash`, `special_cancel`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Punch => "punch",
            Self::Kick => "kick",
            Self::Slash => "slash",
            Self::HeavySlash => "heavy_slash",
            Self::Dust => "dust",
            Self::SpecialCancel => "special_cancel",
            Self::Dash => "dash",
        }
    }
}

impl fmt::Display for LogicalButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of key transition reported by the capture source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Key went down.
    Down,
    /// Key went up.
    Up,
    /// Auto-repeat while held. Carries no state change.
    Repeat,
}

/// Effective level of a button as seen by the encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Not held and not latched.
    Up,
    /// Held, or released but still latched.
    Down,
}

impl Level {
    /// 1 for [`Level::Down`], 0 for [`Level::Up`].
    pub fn weight(self) -> i8 {
        match self {
            Self::Up => 0,
            Self::Down => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_order() {
        for (i, button) in LogicalButton::ALL.iter().enumerate() {
            assert_eq!(button.index(), i);
        }
    }

    #[test]
    fn directions() {
        let directions: Vec<_> =
            LogicalButton::ALL.iter().copied().filter(|b| b.is_direction()).collect();
        assert_eq!(directions, vec![
            LogicalButton::Up,
            LogicalButton::Down,
            LogicalButton::Left,
            LogicalButton::Right
        ]);
    }

    #[test]
    fn actions_cover_every_non_direction() {
        let actions: Vec<_> = LogicalButton::ACTIONS.iter().map(|(b, _)| *b).collect();
        let rest: Vec<_> =
            LogicalButton::ALL.iter().copied().filter(|b| !b.is_direction()).collect();
        assert_eq!(actions, rest);
    }

    #[test]
    fn serde_names_match_display() {
        for button in LogicalButton::ALL {
            let json = serde_json::to_string(&button).unwrap_or_default();
            assert_eq!(json, format!("\"{button}\""));
        }
    }

    #[test]
    fn roman_cancel_alias() {
        let parsed: Result<LogicalButton, _> = serde_json::from_str("\"roman_cancel\"");
        assert_eq!(parsed.ok(), Some(LogicalButton::SpecialCancel));
    }
}
