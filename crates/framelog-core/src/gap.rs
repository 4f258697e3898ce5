//! Run-length notation for the number of frames between two tokens.
//!
//! | frames  | output                                  |
//! |---------|-----------------------------------------|
//! | 0, 1    | nothing                                 |
//! | 2       | a single space                          |
//! | 3..=60  | glyph run for `frames - 2`: `>` = 10, `~` = 5, `=` = 2, `-` = 1 |
//! | > 60    | `(frames)`                              |

/// Longest gap rendered as a glyph run. Anything longer is printed as a
/// number.
pub const MAX_GLYPH_GAP: u64 = 60;

/// Glyph tiers, largest first.
const TIERS: [(u64, char); 4] = [(10, '>'), (5, '~'), (2, '='), (1, '-')];

/// Format a frame gap.
pub fn format_gap(frames: u64) -> String {
    match frames {
        0 | 1 => String::new(),
        2 => " ".to_string(),
        3..=MAX_GLYPH_GAP => {
            let mut remain = frames - 2;
            let mut out = String::new();
            for (size, glyph) in TIERS {
                let count = remain / size;
                remain -= count * size;
                out.extend(std::iter::repeat_n(glyph, count as usize));
            }
            out
        },
        _ => format!("({frames})"),
    }
}
