// src/merge/assemble.rs
use crate::types::FileReport;

/// Orders merged reports by file name (byte-wise).
#[must_use]
pub fn assemble<I>(reports: I) -> Vec<FileReport>
where
    I: IntoIterator<Item = FileReport>,
{
    let mut out: Vec<FileReport> = reports.into_iter().collect();
    out.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    out
}
