//! Per-button sticky state machine.
//!
//! A press latches the button. The latch survives the physical release and is
//! only cleared by an explicit [`KeyState::unlock`], which the encoder issues
//! at frame boundaries. A tap that starts and ends between two frame
//! boundaries therefore still reads as held for at least one frame.
//!
//! ```text
//!                 press                    release
//!   Released ───────────► PressedSticky ─────────────► ReleasedPendingUnlock
//!      ▲                       │ unlock                         │ unlock
//!      │      release          ▼                                │
//!      └──────────────── PressedUnlocked                        │
//!      ▲                                                        │
//!      └────────────────────────────────────────────────────────┘
//! ```

use crate::Level;

/// Physical and latch state of one logical button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Physically up, not latched.
    #[default]
    Released,
    /// Physically down, latched by the press.
    PressedSticky,
    /// Physically down, latch already cleared by a frame boundary.
    PressedUnlocked,
    /// Physically up but still latched. A flush is owed before unlocking.
    ReleasedPendingUnlock,
}

impl KeyState {
    /// State after a press edge.
    #[must_use]
    pub fn press(self) -> Self {
        Self::PressedSticky
    }

    /// State after a release edge. The latch is left untouched.
    #[must_use]
    pub fn release(self) -> Self {
        match self {
            Self::PressedSticky => Self::ReleasedPendingUnlock,
            Self::PressedUnlocked => Self::Released,
            Self::Released | Self::ReleasedPendingUnlock => self,
        }
    }

    /// State after clearing the latch. The physical state is untouched.
    #[must_use]
    pub fn unlock(self) -> Self {
        match self {
            Self::PressedSticky => Self::PressedUnlocked,
            Self::ReleasedPendingUnlock => Self::Released,
            Self::Released | Self::PressedUnlocked => self,
        }
    }

    /// Level read by the encoders: down while held or latched.
    pub fn effective(self) -> Level {
        match self {
            Self::Released => Level::Up,
            Self::PressedSticky | Self::PressedUnlocked | Self::ReleasedPendingUnlock => {
                Level::Down
            },
        }
    }

    /// Whether the button is physically held.
    pub fn is_pressed(self) -> bool {
        matches!(self, Self::PressedSticky | Self::PressedUnlocked)
    }

    /// Whether the button is latched.
    pub fn is_sticky(self) -> bool {
        matches!(self, Self::PressedSticky | Self::ReleasedPendingUnlock)
    }

    /// Tapped and released, but not yet unlocked.
    pub fn has_pending_unlock(self) -> bool {
        self == Self::ReleasedPendingUnlock
    }
}
