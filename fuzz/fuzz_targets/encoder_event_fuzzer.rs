//! Fuzz target for the notation encoder state machine
//!
//! Ensure committed text is append-only under any input (HIGH priority)
//!
//! # Strategy
//!
//! - Buttons: any of the 11 logical buttons
//! - Edges: down, up, repeat, plus timer polls and clears
//! - Delays: zero, sub-frame, exact boundary multiples, long pauses,
//!   occasional backwards jumps, and jumps anywhere in the `u64` range
//!   (including right up to `u64::MAX`)
//!
//! # Invariants
//!
//! - Committed text only grows between clears
//! - Display always starts with the committed text
//! - Frame count never decreases between clears
//! - Direction digit is always 1..=9
//! - Clear always yields an empty display and an unanchored clock

#![no_main]

use arbitrary::Arbitrary;
use framelog_core::{Edge, LogicalButton, NotationEncoder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum EncoderOp {
    Event { button: u8, edge: EdgeChoice, delay: Delay },
    Poll { delay: Delay },
    Clear,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum EdgeChoice {
    Down,
    Up,
    Repeat,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Delay {
    Zero,
    SubFrame(u8),
    Frames(u8),
    Long(u16),
    Backwards(u8),
    Far(u64),
    Absolute(u64),
}

fn advance(now: u64, delay: Delay) -> u64 {
    match delay {
        Delay::Zero => now,
        Delay::SubFrame(ms) => now.saturating_add(u64::from(ms % 17)),
        Delay::Frames(n) => now.saturating_add((u64::from(n) * 1000).div_ceil(60)),
        Delay::Long(ms) => now.saturating_add(u64::from(ms)),
        Delay::Backwards(ms) => now.saturating_sub(u64::from(ms)),
        Delay::Far(ms) => now.saturating_add(ms),
        Delay::Absolute(ms) => ms,
    }
}

fuzz_target!(|ops: Vec<EncoderOp>| {
    let mut encoder = NotationEncoder::new();
    let mut now = 1_000u64;
    let mut committed = String::new();
    let mut frame = 0u64;

    for op in ops {
        let display = match op {
            EncoderOp::Event { button, edge, delay } => {
                now = advance(now, delay);
                let button = LogicalButton::ALL[usize::from(button) % LogicalButton::COUNT];
                let edge = match edge {
                    EdgeChoice::Down => Edge::Down,
                    EdgeChoice::Up => Edge::Up,
                    EdgeChoice::Repeat => Edge::Repeat,
                };
                encoder.handle_event(button, edge, now)
            }
            EncoderOp::Poll { delay } => {
                now = advance(now, delay);
                encoder.poll(now)
            }
            EncoderOp::Clear => {
                let display = encoder.clear();
                assert!(display.is_empty());
                assert!(!encoder.clock().is_anchored());
                committed.clear();
                frame = 0;
                continue;
            }
        };

        assert!(
            encoder.committed().starts_with(&committed),
            "committed text rewritten: {:?} -> {:?}",
            committed,
            encoder.committed()
        );
        assert!(display.starts_with(encoder.committed()));
        assert!(encoder.frame_count() >= frame);
        assert!((1..=9).contains(&encoder.registry().direction_code()));

        committed = encoder.committed().to_string();
        frame = encoder.frame_count();
    }
});
