//! Logical frame clock.
//!
//! Maps wall-clock milliseconds onto a 60 Hz frame grid. The grid origin is
//! the first observed timestamp: whatever instant the first event arrives at
//! is frame 0 by definition.
//!
//! # Invariants
//!
//! - The anchor is set on the first [`FrameClock::observe`] and never moves
//!   until [`FrameClock::reset`].
//! - `frame_count` never decreases. Timestamps that run backwards are clamped
//!   to a zero delta rather than rewinding the grid.

/// Logical frames per wall-clock second.
pub const FRAMES_PER_SECOND: u64 = 60;

const MILLIS_PER_SECOND: u64 = 1000;

/// Number of whole frames contained in `elapsed_ms` milliseconds.
///
/// Split into whole seconds and remainder so the full `u64` range is exact.
pub fn frame_index(elapsed_ms: u64) -> u64 {
    let seconds = elapsed_ms / MILLIS_PER_SECOND;
    let rest_ms = elapsed_ms % MILLIS_PER_SECOND;
    seconds * FRAMES_PER_SECOND + rest_ms * FRAMES_PER_SECOND / MILLIS_PER_SECOND
}

/// Offset from the anchor (in ms, rounded up) at which frame `frame` begins.
///
/// Saturates at `u64::MAX` for frames past the end of the timestamp range.
fn frame_start_offset_ms(frame: u64) -> u64 {
    let seconds = frame / FRAMES_PER_SECOND;
    let rest = frame % FRAMES_PER_SECOND;
    seconds
        .saturating_mul(MILLIS_PER_SECOND)
        .saturating_add((rest * MILLIS_PER_SECOND).div_ceil(FRAMES_PER_SECOND))
}

/// Monotonic 60 Hz frame counter anchored at the first observed timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameClock {
    /// Wall-clock origin of the frame grid. `None` until first observation.
    anchor_ms: Option<u64>,
    /// Frame index of the most recent observation.
    frame_count: u64,
}

impl FrameClock {
    /// Create an unanchored clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a timestamp and return how many frame boundaries were crossed
    /// since the previous observation.
    ///
    /// The first call anchors the grid and returns 0.
    pub fn observe(&mut self, timestamp_ms: u64) -> u64 {
        let Some(anchor) = self.anchor_ms else {
            self.anchor_ms = Some(timestamp_ms);
            self.frame_count = 0;
            return 0;
        };

        let current = frame_index(timestamp_ms.saturating_sub(anchor));
        if current <= self.frame_count {
            return 0;
        }

        let delta = current - self.frame_count;
        self.frame_count = current;
        delta
    }

    /// Wall-clock instant at which frame `frame_count + 1` begins.
    ///
    /// `None` while the clock is unanchored. Saturates at `u64::MAX`.
    pub fn next_boundary_ms(&self) -> Option<u64> {
        let offset = frame_start_offset_ms(self.frame_count.saturating_add(1));
        self.anchor_ms.map(|anchor| anchor.saturating_add(offset))
    }

    /// Forget the anchor and rewind to frame 0.
    pub fn reset(&mut self) {
        self.anchor_ms = None;
        self.frame_count = 0;
    }

    /// Frame index of the most recent observation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Grid origin. `None` until the first observation.
    pub fn anchor_ms(&self) -> Option<u64> {
        self.anchor_ms
    }

    /// Whether the clock has been anchored.
    pub fn is_anchored(&self) -> bool {
        self.anchor_ms.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_truncates() {
        assert_eq!(frame_index(0), 0);
        assert_eq!(frame_index(16), 0);
        assert_eq!(frame_index(17), 1);
        assert_eq!(frame_index(33), 1);
        assert_eq!(frame_index(34), 2);
        assert_eq!(frame_index(1000), 60);
    }

    #[test]
    fn first_observation_anchors() {
        let mut clock = FrameClock::new();
        assert!(!clock.is_anchored());

        assert_eq!(clock.observe(123_456), 0);
        assert_eq!(clock.anchor_ms(), Some(123_456));
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn zero_timestamp_is_a_valid_anchor() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.observe(0), 0);
        assert!(clock.is_anchored());

        // Must not re-anchor at 50ms
        assert_eq!(clock.observe(50), 3);
        assert_eq!(clock.anchor_ms(), Some(0));
    }

    #[test]
    fn same_timestamp_twice_is_zero_delta() {
        let mut clock = FrameClock::new();
        clock.observe(1000);
        assert_eq!(clock.observe(1100), 6);
        assert_eq!(clock.observe(1100), 0);
        assert_eq!(clock.frame_count(), 6);
    }

    #[test]
    fn backwards_timestamp_clamps_to_zero() {
        let mut clock = FrameClock::new();
        clock.observe(1000);
        clock.observe(1200);
        let frames = clock.frame_count();

        assert_eq!(clock.observe(1100), 0);
        assert_eq!(clock.observe(500), 0);
        assert_eq!(clock.frame_count(), frames);
    }

    #[test]
    fn next_boundary_rounds_up() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.next_boundary_ms(), None);

        clock.observe(1000);
        // 1000 / 60 = 16.67 -> 17
        assert_eq!(clock.next_boundary_ms(), Some(1017));

        clock.observe(1017);
        assert_eq!(clock.frame_count(), 1);
        // 2000 / 60 = 33.33 -> 34
        assert_eq!(clock.next_boundary_ms(), Some(1034));
    }

    #[test]
    fn observing_the_boundary_advances_one_frame() {
        let mut clock = FrameClock::new();
        clock.observe(7);
        for expected in 1..=120 {
            let Some(boundary) = clock.next_boundary_ms() else {
                unreachable!("clock is anchored");
            };
            assert_eq!(clock.observe(boundary), 1);
            assert_eq!(clock.frame_count(), expected);
        }
    }

    #[test]
    fn frame_index_covers_full_range() {
        for elapsed in [u64::MAX, u64::MAX / 2, u64::MAX - 999, 999_999_999_999_999] {
            let expected = u128::from(elapsed) * 60 / 1000;
            assert_eq!(u128::from(frame_index(elapsed)), expected, "{elapsed}");
        }
    }

    #[test]
    fn far_timestamp_does_not_overflow() {
        let mut clock = FrameClock::new();
        clock.observe(0);
        assert_eq!(clock.observe(u64::MAX), frame_index(u64::MAX));
        assert_eq!(clock.next_boundary_ms(), Some(u64::MAX));
    }

    #[test]
    fn boundary_saturates_near_max_anchor() {
        let mut clock = FrameClock::new();
        clock.observe(u64::MAX - 5);
        assert_eq!(clock.next_boundary_ms(), Some(u64::MAX));

        assert_eq!(clock.observe(u64::MAX - 4), 0);
        assert_eq!(clock.observe(u64::MAX), 0);
    }

    #[test]
    fn reset_unanchors() {
        let mut clock = FrameClock::new();
        clock.observe(1000);
        clock.observe(2000);
        clock.reset();

        assert_eq!(clock, FrameClock::new());
        assert_eq!(clock.observe(5000), 0);
        assert_eq!(clock.anchor_ms(), Some(5000));
    }
}
