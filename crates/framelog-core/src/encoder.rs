//! Notation encoder.
//!
//! The [`NotationEncoder`] turns timestamped key edges into notation text. It
//! owns a [`FrameClock`] and a [`KeyRegistry`] and keeps two pieces of output:
//!
//! - committed text: tokens for frames that have closed, append-only
//! - live token: state of the frame that is still open, plus the gap that
//!   precedes it
//!
//! The display string is always `committed + format_gap(live_gap) + live`.
//!
//! # Frame boundaries
//!
//! Before applying an edge, the encoder checks whether the edge lies past the
//! next frame boundary. If so, every latch is cleared. When a released button
//! was still latched, the frame it was visible in is committed first, at the
//! boundary instant, so a tap shorter than one frame still produces one token.
//!
//! After applying the edge the clock is advanced to the edge's timestamp. If
//! any boundary was crossed, the previous live token is committed and the new
//! live token starts after a gap of that many frames. Within one frame the
//! live token is simply overwritten with the latest state.

use crate::{Edge, FrameClock, KeyRegistry, LogicalButton, format_gap};

/// Frame-quantized notation encoder.
#[derive(Debug, Clone, Default)]
pub struct NotationEncoder {
    clock: FrameClock,
    registry: KeyRegistry,
    /// Tokens of closed frames.
    committed: String,
    /// Token for the open frame. Empty before the first event.
    live_token: String,
    /// Frames between the last committed token and the live token.
    live_gap_frames: u64,
}

impl NotationEncoder {
    /// Create an encoder for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one key edge and return the updated display string.
    ///
    /// A [`Edge::Down`] on a button that is already physically held is
    /// auto-repeat and is ignored, as is [`Edge::Repeat`]. Timestamps must be
    /// non-decreasing.
    pub fn handle_event(&mut self, button: LogicalButton, edge: Edge, timestamp_ms: u64) -> String {
        match edge {
            Edge::Down => {
                if self.registry.is_pressed(button) {
                    tracing::trace!(%button, timestamp_ms, "suppressed duplicate press");
                    return self.display();
                }
                self.check_boundary(timestamp_ms);
                self.registry.press(button);
            },
            Edge::Up => {
                self.check_boundary(timestamp_ms);
                self.registry.release(button);
            },
            Edge::Repeat => return self.display(),
        }

        let delta = self.clock.observe(timestamp_ms);
        if delta > 0 {
            self.commit_live(delta);
        }
        self.live_token = self.registry.token();

        self.display()
    }

    /// Run the frame boundary check without an edge and return the display.
    ///
    /// Lets a timer flush a tap whose frame has closed without waiting for
    /// the next key edge.
    pub fn poll(&mut self, timestamp_ms: u64) -> String {
        self.check_boundary(timestamp_ms);
        self.display()
    }

    /// Clear latches if `timestamp_ms` is past the next frame boundary,
    /// committing the boundary frame when a released button was still latched.
    pub fn check_boundary(&mut self, timestamp_ms: u64) {
        let Some(boundary_ms) = self.clock.next_boundary_ms() else {
            return;
        };
        if timestamp_ms < boundary_ms {
            return;
        }

        let had_pending = self.registry.any_pending_unlock();
        self.registry.unlock_all();
        if !had_pending {
            return;
        }

        self.clock.observe(boundary_ms);
        self.commit_live(1);
        self.live_token = self.registry.token();
        tracing::trace!(boundary_ms, frame = self.clock.frame_count(), "flushed latched tap");
    }

    /// Reset to a fresh session and return the (empty) display.
    pub fn clear(&mut self) -> String {
        self.committed.clear();
        self.live_token.clear();
        self.live_gap_frames = 0;
        self.clock.reset();
        self.registry.reset_all();
        self.display()
    }

    /// Committed text, gap, and live token.
    pub fn display(&self) -> String {
        let gap = format_gap(self.live_gap_frames);
        let mut out = String::with_capacity(self.committed.len() + gap.len() + self.live_token.len());
        out.push_str(&self.committed);
        out.push_str(&gap);
        out.push_str(&self.live_token);
        out
    }

    /// Tokens of closed frames.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Token for the open frame.
    pub fn live_token(&self) -> &str {
        &self.live_token
    }

    /// Frames between the last committed token and the live token.
    pub fn live_gap_frames(&self) -> u64 {
        self.live_gap_frames
    }

    /// Frame index of the open frame.
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Button states.
    pub fn registry(&self) -> &KeyRegistry {
        &self.registry
    }

    /// Move the live token (with its gap) into the committed text and start a
    /// new live token `gap_frames` after it.
    fn commit_live(&mut self, gap_frames: u64) {
        self.committed.push_str(&format_gap(self.live_gap_frames));
        self.committed.push_str(&self.live_token);
        self.live_token.clear();
        self.live_gap_frames = gap_frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        KeyState,
        LogicalButton::{Dash, Down, Dust, HeavySlash, Kick, Left, Punch, Right, Slash, Up},
    };

    #[test]
    fn first_press_shows_live_token() {
        let mut encoder = NotationEncoder::new();
        assert_eq!(encoder.display(), "");

        assert_eq!(encoder.handle_event(Punch, Edge::Down, 1000), "5P");
        assert_eq!(encoder.committed(), "");
        assert_eq!(encoder.live_gap_frames(), 0);
    }

    #[test]
    fn same_frame_overwrites_live_token() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Down, Edge::Down, 1000);
        assert_eq!(encoder.handle_event(Right, Edge::Down, 1010), "3");
        assert_eq!(encoder.committed(), "");
    }

    #[test]
    fn boundary_commits_previous_token() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Down, Edge::Down, 1000);
        // 100ms later = frame 6
        let display = encoder.handle_event(Kick, Edge::Down, 1100);

        assert_eq!(encoder.committed(), "2");
        assert_eq!(encoder.live_gap_frames(), 6);
        assert_eq!(encoder.live_token(), "2K");
        assert_eq!(display, "2==2K");
    }

    #[test]
    fn duplicate_press_is_ignored() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Slash, Edge::Down, 1000);
        let before = encoder.clone();

        assert_eq!(encoder.handle_event(Slash, Edge::Down, 5000), "5S");
        assert_eq!(encoder.frame_count(), before.frame_count());
        assert_eq!(encoder.registry(), before.registry());
    }

    #[test]
    fn repeat_edge_is_ignored() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Dash, Edge::Down, 1000);
        assert_eq!(encoder.handle_event(Dash, Edge::Repeat, 9000), "5dash");
        assert_eq!(encoder.frame_count(), 0);
    }

    #[test]
    fn sub_frame_tap_is_committed() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Up, Edge::Down, 1000);
        encoder.handle_event(Up, Edge::Up, 1005);
        assert_eq!(encoder.registry().state(Up), KeyState::ReleasedPendingUnlock);

        let display = encoder.handle_event(Punch, Edge::Down, 1100);

        // Tap frame committed, then one neutral frame at the boundary, then
        // the punch five frames later.
        assert_eq!(encoder.committed(), "85");
        assert_eq!(display, "85=-5P");
    }

    #[test]
    fn held_button_is_unlocked_without_flush() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Left, Edge::Down, 1000);
        encoder.handle_event(Punch, Edge::Down, 1100);

        assert_eq!(encoder.registry().state(Left), KeyState::PressedUnlocked);
        assert_eq!(encoder.committed(), "4");
    }

    #[test]
    fn poll_flushes_tap_without_next_event() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Up, Edge::Down, 1000);
        encoder.handle_event(Up, Edge::Up, 1005);

        assert_eq!(encoder.poll(1010), "8");
        assert_eq!(encoder.poll(1020), "85");
        assert_eq!(encoder.frame_count(), 1);
    }

    #[test]
    fn poll_before_first_event_is_noop() {
        let mut encoder = NotationEncoder::new();
        assert_eq!(encoder.poll(1_000_000), "");
        assert!(!encoder.clock().is_anchored());
    }

    #[test]
    fn long_gap_uses_number() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(HeavySlash, Edge::Down, 0);
        encoder.handle_event(HeavySlash, Edge::Up, 5);
        encoder.handle_event(Dust, Edge::Down, 2000);

        // 2000ms = frame 120, boundary flush consumed frame 1
        assert_eq!(encoder.display(), "5H5(119)5D");
    }

    #[test]
    fn clear_resets_everything() {
        let mut encoder = NotationEncoder::new();
        encoder.handle_event(Down, Edge::Down, 1000);
        encoder.handle_event(Punch, Edge::Down, 1500);

        assert_eq!(encoder.clear(), "");
        assert_eq!(encoder.committed(), "");
        assert_eq!(encoder.live_token(), "");
        assert_eq!(encoder.live_gap_frames(), 0);
        assert!(!encoder.clock().is_anchored());
        assert_eq!(encoder.registry(), &KeyRegistry::new());
    }
}
