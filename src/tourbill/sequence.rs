//! Invoice number arithmetic.
//!
//! Numbers have the fixed form `HK-<year>-<seq>` with the sequence
//! zero-padded to three digits. The counter is scoped to a calendar year:
//! state recorded for any other year counts as zero, so the first save of
//! a new year starts over at `001`. The stateful side (loading and
//! committing [`SequenceState`]) lives in the store; everything here is
//! pure so it can be tested without a backend.

use crate::model::SequenceState;

pub const NUMBER_PREFIX: &str = "HK";

/// Sequence number the next save should take, given whatever state is
/// currently persisted. `None` covers both "never saved" and "state was
/// unreadable"; either way the year starts at 1.
pub fn next_in_year(state: Option<&SequenceState>, year: i32) -> u32 {
    match state {
        Some(s) if s.year == year => s.count + 1,
        _ => 1,
    }
}

pub fn format_number(year: i32, seq: u32) -> String {
    format!("{}-{}-{:03}", NUMBER_PREFIX, year, seq)
}
