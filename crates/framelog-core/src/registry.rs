//! Aggregate state of every logical button.
//!
//! The registry owns one [`KeyState`] per [`LogicalButton`] and reduces them
//! to the two halves of a notation token: a numpad direction digit and the
//! held action symbols.

use crate::{KeyState, Level, LogicalButton};

/// Numpad digit for the neutral direction.
pub const NEUTRAL_DIRECTION: u8 = 5;

/// Per-button state table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRegistry {
    states: [KeyState; LogicalButton::COUNT],
}

impl KeyRegistry {
    /// Create a registry with every button released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `button`.
    pub fn state(&self, button: LogicalButton) -> KeyState {
        self.states[button.index()]
    }

    /// Effective level of `button`.
    pub fn effective(&self, button: LogicalButton) -> Level {
        self.state(button).effective()
    }

    /// Whether `button` is physically held.
    pub fn is_pressed(&self, button: LogicalButton) -> bool {
        self.state(button).is_pressed()
    }

    /// Apply a press edge to `button`.
    pub fn press(&mut self, button: LogicalButton) {
        self.update(button, KeyState::press);
    }

    /// Apply a release edge to `button`.
    pub fn release(&mut self, button: LogicalButton) {
        self.update(button, KeyState::release);
    }

    /// Clear the latch on `button`.
    pub fn unlock(&mut self, button: LogicalButton) {
        self.update(button, KeyState::unlock);
    }

    /// Whether any button was tapped and released but not yet unlocked.
    pub fn any_pending_unlock(&self) -> bool {
        self.states.iter().any(|s| s.has_pending_unlock())
    }

    /// Clear the latch on every button.
    pub fn unlock_all(&mut self) {
        for state in &mut self.states {
            *state = state.unlock();
        }
    }

    /// Return every button to [`KeyState::Released`].
    pub fn reset_all(&mut self) {
        self.states = [KeyState::Released; LogicalButton::COUNT];
    }

    /// Numpad direction digit for the effective direction buttons.
    ///
    /// Weighted sum around [`NEUTRAL_DIRECTION`]: left -1, right +1, down -3,
    /// up +3. Opposing directions simply sum, so left+right reads as 5.
    pub fn direction_code(&self) -> u8 {
        let w = |button| self.effective(button).weight();
        let offset = -w(LogicalButton::Left) + w(LogicalButton::Right)
            - 3 * w(LogicalButton::Down)
            + 3 * w(LogicalButton::Up);
        (NEUTRAL_DIRECTION as i8 + offset) as u8
    }

    /// Symbols of the effective action buttons, in fixed P K S H D C dash
    /// order.
    pub fn action_text(&self) -> String {
        LogicalButton::ACTIONS
            .iter()
            .filter(|(button, _)| self.effective(*button) == Level::Down)
            .map(|(_, symbol)| *symbol)
            .collect()
    }

    /// Full token: direction digit followed by action symbols.
    pub fn token(&self) -> String {
        format!("{}{}", self.direction_code(), self.action_text())
    }

    fn update(&mut self, button: LogicalButton, transition: fn(KeyState) -> KeyState) {
        let slot = &mut self.states[button.index()];
        *slot = transition(*slot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(buttons: &[LogicalButton]) -> KeyRegistry {
        let mut registry = KeyRegistry::new();
        for &button in buttons {
            registry.press(button);
        }
        registry
    }

    #[test]
    fn neutral_direction() {
        assert_eq!(KeyRegistry::new().direction_code(), NEUTRAL_DIRECTION);
    }

    #[test]
    fn numpad_layout() {
        use LogicalButton::{Down, Left, Right, Up};

        let cases: [(&[LogicalButton], u8); 9] = [
            (&[Down, Left], 1),
            (&[Down], 2),
            (&[Down, Right], 3),
            (&[Left], 4),
            (&[], 5),
            (&[Right], 6),
            (&[Up, Left], 7),
            (&[Up], 8),
            (&[Up, Right], 9),
        ];

        for (buttons, expected) in cases {
            assert_eq!(holding(buttons).direction_code(), expected, "{buttons:?}");
        }
    }

    #[test]
    fn opposing_directions_sum() {
        use LogicalButton::{Down, Left, Right, Up};

        assert_eq!(holding(&[Left, Right]).direction_code(), 5);
        assert_eq!(holding(&[Up, Down]).direction_code(), 5);
        assert_eq!(holding(&[Up, Down, Left, Right]).direction_code(), 5);
        assert_eq!(holding(&[Up, Left, Right]).direction_code(), 8);
    }

    #[test]
    fn action_text_fixed_order() {
        use LogicalButton::{Dash, Dust, Kick, Punch};

        assert_eq!(KeyRegistry::new().action_text(), "");
        assert_eq!(holding(&[Dust, Punch]).action_text(), "PD");
        assert_eq!(holding(&[Punch, Dust]).action_text(), "PD");
        assert_eq!(holding(&[Dash, Kick, Punch]).action_text(), "PKdash");
    }

    #[test]
    fn action_text_every_button() {
        let registry = holding(&LogicalButton::ALL);
        assert_eq!(registry.action_text(), "PKSHDCdash");
        assert_eq!(registry.token(), "5PKSHDCdash");
    }

    #[test]
    fn token_combines_direction_and_actions() {
        use LogicalButton::{Down, Kick, Punch, Right};

        assert_eq!(KeyRegistry::new().token(), "5");
        assert_eq!(holding(&[Down, Right, Kick, Punch]).token(), "3PK");
    }

    #[test]
    fn released_latch_still_reads_down() {
        let mut registry = holding(&[LogicalButton::Up]);
        registry.release(LogicalButton::Up);

        assert!(registry.any_pending_unlock());
        assert_eq!(registry.direction_code(), 8);

        registry.unlock_all();
        assert!(!registry.any_pending_unlock());
        assert_eq!(registry.direction_code(), 5);
    }

    #[test]
    fn unlock_all_keeps_held_buttons_down() {
        let mut registry = holding(&[LogicalButton::Punch]);
        registry.unlock_all();

        assert!(registry.is_pressed(LogicalButton::Punch));
        assert_eq!(registry.action_text(), "P");

        registry.release(LogicalButton::Punch);
        assert_eq!(registry.action_text(), "");
    }

    #[test]
    fn reset_all_releases_everything() {
        let mut registry = holding(&LogicalButton::ALL);
        registry.release(LogicalButton::Kick);
        registry.reset_all();

        assert_eq!(registry, KeyRegistry::new());
        assert_eq!(registry.token(), "5");
    }
}
