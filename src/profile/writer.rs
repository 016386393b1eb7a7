// src/profile/writer.rs
//! Serializes merged reports back out, as a cover profile or as JSON.

use crate::types::FileReport;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Go cover profile, readable by `go tool cover`.
    #[default]
    Text,
    Json,
}

/// Writes `reports` to `w` in the requested format.
///
/// # Errors
/// Returns error if writing or JSON serialization fails.
pub fn write_reports<W: Write>(
    reports: &[FileReport],
    format: OutputFormat,
    w: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(reports, w),
        OutputFormat::Json => write_json(reports, w),
    }
}

/// Writes a cover profile: the first report's mode header, then one line per
/// range. Nothing is written for an empty result.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_text<W: Write>(reports: &[FileReport], w: &mut W) -> io::Result<()> {
    let Some(first) = reports.first() else {
        return Ok(());
    };
    writeln!(w, "mode: {}", first.mode)?;
    for report in reports {
        write_report(report, w)?;
    }
    Ok(())
}

/// Writes the block lines of one report, without a mode header.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_report<W: Write>(report: &FileReport, w: &mut W) -> io::Result<()> {
    let name = &report.file_name;
    for r in &report.ranges {
        writeln!(
            w,
            "{name}:{}.{},{}.{} {} {}",
            r.start_line, r.start_col, r.end_line, r.end_col, r.statements, r.hits
        )?;
    }
    Ok(())
}

/// Writes `reports` as a pretty-printed JSON array.
///
/// # Errors
/// Returns error if writing fails.
pub fn write_json<W: Write>(reports: &[FileReport], w: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, reports)?;
    writeln!(w)
}

/// Renders `reports` as cover profile text.
#[must_use]
pub fn to_text(reports: &[FileReport]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_text(reports, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
