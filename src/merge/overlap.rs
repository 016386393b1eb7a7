// src/merge/overlap.rs
//! Collapses sorted ranges into a minimal non-overlapping set.
//!
//! Overlapping or touching ranges are folded into a single accumulator. The
//! accumulator keeps its start, grows to the furthest end, and takes the
//! maximum statement and hit counts of everything folded into it. Hits are
//! treated as repeated observations of the same execution, so they are never
//! summed.

use crate::types::{Position, Range};
use std::cmp::Ordering;

/// Returns true if `next` overlaps or touches `current`.
///
/// A range on a strictly later line than `current` ends never overlaps. On the
/// shared line, `next` overlaps when it starts at or before `current`'s end
/// column.
#[must_use]
pub fn overlaps(current: &Range, next: &Range) -> bool {
    match current.end_line.cmp(&next.start_line) {
        Ordering::Less => false,
        Ordering::Greater => true,
        Ordering::Equal => current.end_col >= next.start_col,
    }
}

/// The lexicographically greater end position of the two ranges.
#[must_use]
pub fn max_end(a: &Range, b: &Range) -> Position {
    if a.end() > b.end() {
        a.end()
    } else {
        b.end()
    }
}

/// Folds `next` into `current`.
fn absorb(current: &mut Range, next: &Range) {
    (current.end_line, current.end_col) = max_end(current, next);
    current.statements = current.statements.max(next.statements);
    current.hits = current.hits.max(next.hits);
}

/// Sweeps ranges sorted by [`compare_ranges`](super::order::compare_ranges)
/// and returns them with every overlapping run collapsed.
#[must_use]
pub fn collapse<I>(sorted: I) -> Vec<Range>
where
    I: IntoIterator<Item = Range>,
{
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(iter.size_hint().0 + 1);
    for next in iter {
        if overlaps(&current, &next) {
            absorb(&mut current, &next);
        } else {
            out.push(std::mem::replace(&mut current, next));
        }
    }
    out.push(current);
    out
}

/// Returns true if no adjacent pair in `ranges` overlaps.
#[must_use]
pub fn is_disjoint(ranges: &[Range]) -> bool {
    ranges.windows(2).all(|w| !overlaps(&w[0], &w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(sl: u32, sc: u32, el: u32, ec: u32) -> Range {
        Range::new((sl, sc), (el, ec), 0, 0)
    }

    #[test]
    fn zero_ranges_overlap() {
        assert!(overlaps(&Range::default(), &Range::default()));
    }

    #[test]
    fn identical_ranges_overlap() {
        assert!(overlaps(&span(1, 1, 1, 1), &span(1, 1, 1, 1)));
    }

    #[test]
    fn next_column_does_not_overlap() {
        assert!(!overlaps(&span(1, 1, 1, 1), &span(1, 2, 1, 2)));
    }

    #[test]
    fn shared_column_overlaps() {
        assert!(overlaps(&span(1, 1, 1, 2), &span(1, 2, 1, 3)));
    }

    #[test]
    fn line_gap_never_overlaps() {
        assert!(!overlaps(&span(1, 1, 1, 80), &span(2, 0, 2, 1)));
    }

    #[test]
    fn later_end_line_always_overlaps() {
        assert!(overlaps(&span(1, 1, 3, 0), &span(2, 99, 2, 100)));
    }

    #[test]
    fn max_end_cases() {
        let cases = [
            ((1, 1), (1, 1), (1, 1)),
            ((2, 25), (1, 1), (2, 25)),
            ((1, 25), (7, 1), (7, 1)),
            ((7, 25), (7, 1), (7, 25)),
        ];
        for (a, b, want) in cases {
            let a = Range::new((0, 0), a, 0, 0);
            let b = Range::new((0, 0), b, 0, 0);
            assert_eq!(max_end(&a, &b), want);
        }
    }

    #[test]
    fn empty_collapses_to_empty() {
        assert!(collapse(Vec::new()).is_empty());
    }

    #[test]
    fn single_range_passes_through() {
        let r = Range::new((3, 4), (5, 6), 7, 8);
        assert_eq!(collapse(vec![r]), vec![r]);
    }

    #[test]
    fn touching_ranges_merge_with_max_counts() {
        let out = collapse(vec![
            Range::new((22, 10), (25, 35), 3, 0),
            Range::new((25, 35), (26, 18), 1, 4),
        ]);
        assert_eq!(out, vec![Range::new((22, 10), (26, 18), 3, 4)]);
    }

    #[test]
    fn contained_range_keeps_outer_end() {
        let out = collapse(vec![
            Range::new((1, 0), (10, 0), 1, 1),
            Range::new((2, 0), (3, 0), 5, 0),
        ]);
        assert_eq!(out, vec![Range::new((1, 0), (10, 0), 5, 1)]);
    }

    #[test]
    fn chain_of_overlaps_folds_into_one() {
        let out = collapse(vec![span(1, 0, 2, 5), span(2, 5, 3, 1), span(3, 0, 4, 0)]);
        assert_eq!(out, vec![span(1, 0, 4, 0)]);
        assert!(is_disjoint(&out));
    }

    #[test]
    fn identical_ranges_collapse_to_one() {
        let r = Range::new((17, 76), (19, 22), 2, 3);
        assert_eq!(collapse(vec![r, r, r]), vec![r]);
    }

    #[test]
    fn hits_are_not_summed() {
        let out = collapse(vec![
            Range::new((1, 0), (1, 9), 1, 2),
            Range::new((1, 0), (1, 9), 1, 3),
        ]);
        assert_eq!(out[0].hits, 3);
    }

    #[test]
    fn backwards_ranges_collapse_without_panicking() {
        let mut ranges = vec![
            Range::new((5, 5), (1, 1), 1, 0),
            Range::new((2, 0), (3, 0), 2, 0),
            Range::new((0, 0), (9, 9), 1, 1),
        ];
        crate::merge::sort_ranges(&mut ranges);
        let out = collapse(ranges);
        assert_eq!(out, vec![Range::new((0, 0), (9, 9), 2, 1)]);
    }

    #[test]
    fn lone_backwards_range_passes_through() {
        let backwards = span(3, 3, 2, 0);
        let out = collapse(vec![span(1, 0, 1, 5), backwards]);
        assert_eq!(out, vec![span(1, 0, 1, 5), backwards]);
        assert!(is_disjoint(&out));
    }
}
