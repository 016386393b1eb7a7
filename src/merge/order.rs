// src/merge/order.rs
//! Canonical ordering of ranges within one file.

use crate::types::Range;
use std::cmp::Ordering;

/// Orders ranges by start line, start column, end line, then end column.
///
/// Ranges that agree on all four positions compare equal regardless of their
/// counts. The overlap sweep relies on this order: once it moves past a range,
/// nothing later can start before the current accumulator.
#[must_use]
pub fn compare_ranges(a: &Range, b: &Range) -> Ordering {
    a.start_line
        .cmp(&b.start_line)
        .then(a.start_col.cmp(&b.start_col))
        .then(a.end_line.cmp(&b.end_line))
        .then(a.end_col.cmp(&b.end_col))
}

/// Sorts `ranges` in place using [`compare_ranges`].
pub fn sort_ranges(ranges: &mut [Range]) {
    ranges.sort_by(compare_ranges);
}

/// Returns true if `ranges` is already in canonical order.
#[must_use]
pub fn is_sorted(ranges: &[Range]) -> bool {
    ranges
        .windows(2)
        .all(|w| compare_ranges(&w[0], &w[1]) != Ordering::Greater)
}
