// src/merge/aggregate.rs
//! Groups same-file fragments from several reports into one working set.

use crate::types::FileReport;
use std::borrow::Borrow;
use std::collections::HashMap;

/// Groups fragments by file name.
///
/// Each entry owns a fresh range list holding every fragment's ranges for that
/// name, concatenated in input order. The first fragment seen for a name
/// decides the retained mode; later modes are not checked.
#[must_use]
pub fn group_by_file<I>(fragments: I) -> HashMap<String, FileReport>
where
    I: IntoIterator,
    I::Item: Borrow<FileReport>,
{
    let mut groups: HashMap<String, FileReport> = HashMap::new();

    for fragment in fragments {
        let fragment: &FileReport = fragment.borrow();
        groups
            .entry(fragment.file_name.clone())
            .or_insert_with(|| FileReport::new(fragment.file_name.clone(), fragment.mode.clone()))
            .ranges
            .extend_from_slice(&fragment.ranges);
    }

    groups
}
