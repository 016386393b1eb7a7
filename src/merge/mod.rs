// src/merge/mod.rs
//! The merge pipeline: group fragments by file, sort each group, collapse
//! overlaps, then order the files by name.
//!
//! Every step is an in-memory transformation. Nothing here performs I/O or
//! returns an error.

pub mod aggregate;
pub mod assemble;
pub mod order;
pub mod overlap;

pub use self::aggregate::group_by_file;
pub use self::assemble::assemble;
pub use self::order::{compare_ranges, sort_ranges};
pub use self::overlap::{collapse, max_end, overlaps};

use crate::types::FileReport;
use std::borrow::Borrow;
use tracing::{debug, trace};

/// Merges coverage fragments into one canonical report per file.
///
/// The result holds one entry per distinct file name, ordered by name. Each
/// entry's ranges are sorted and no two of them overlap or touch.
#[must_use]
pub fn merge<I>(fragments: I) -> Vec<FileReport>
where
    I: IntoIterator,
    I::Item: Borrow<FileReport>,
{
    merge_filtered(fragments, |_| true)
}

/// Like [`merge`], but drops every fragment whose file name fails `keep`
/// before grouping. Dropped files take no part in the merge.
#[must_use]
pub fn merge_filtered<I, F>(fragments: I, mut keep: F) -> Vec<FileReport>
where
    I: IntoIterator,
    I::Item: Borrow<FileReport>,
    F: FnMut(&str) -> bool,
{
    let mut dropped = 0usize;
    let kept = fragments.into_iter().filter(|f| {
        let report: &FileReport = f.borrow();
        let keep_it = keep(&report.file_name);
        if !keep_it {
            dropped += 1;
        }
        keep_it
    });

    let groups = group_by_file(kept);
    debug!(files = groups.len(), dropped, "grouped coverage fragments");

    assemble(groups.into_values().map(finalize))
}

/// Sorts and collapses the ranges of a single grouped report.
#[must_use]
pub fn finalize(mut report: FileReport) -> FileReport {
    let before = report.ranges.len();
    sort_ranges(&mut report.ranges);
    report.ranges = collapse(std::mem::take(&mut report.ranges));
    trace!(
        file = %report.file_name,
        before,
        after = report.ranges.len(),
        "collapsed ranges"
    );
    report
}
