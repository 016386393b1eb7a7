// src/profile/parser.rs
//! Parser for Go cover profiles.
//!
//! ```text
//! mode: set
//! github.com/org/pkg/file.go:17.76,19.22 2 1
//! ```
//!
//! Each block line is `file:startLine.startCol,endLine.endCol numStmt count`.

use crate::error::{CovError, Result};
use crate::merge::sort_ranges;
use crate::types::{FileReport, Range};
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;
use std::sync::LazyLock;
use tracing::debug;

pub const MODE_PREFIX: &str = "mode: ";

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+):([0-9]+)\.([0-9]+),([0-9]+)\.([0-9]+) ([0-9]+) ([0-9]+)$")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Parses a profile from `text`. `origin` names the input in error messages.
///
/// # Errors
/// See [`parse_profiles`].
pub fn parse_str(text: &str, origin: &str) -> Result<Vec<FileReport>> {
    parse_profiles(text.as_bytes(), origin)
}

/// Parses one cover profile into per-file reports.
///
/// Blocks at the exact same location within one section are folded together:
/// `set` profiles OR their counts, other modes add them. A repeated `mode:`
/// header (concatenated profiles) starts a new section, so separate runs reach
/// the merger as separate fragments. Reports are ordered by file name within
/// each section, sections in input order.
///
/// # Errors
/// Returns error if a mode header or a block line is malformed, if one
/// location carries two different statement counts, or if reading fails.
pub fn parse_profiles<R: BufRead>(reader: R, origin: &str) -> Result<Vec<FileReport>> {
    let mut lines = reader.lines().enumerate();

    let mut mode = loop {
        let Some((_, line)) = lines.next() else {
            return Ok(Vec::new());
        };
        let line = line.map_err(|e| CovError::io(origin, e))?;
        if line.trim().is_empty() {
            continue;
        }
        break parse_mode(&line, origin)?;
    };

    let mut profiles = Vec::new();
    let mut files: HashMap<String, FileReport> = HashMap::new();
    let mut sections = 1usize;
    for (idx, line) in lines {
        let line = line.map_err(|e| CovError::io(origin, e))?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if line.starts_with(MODE_PREFIX) {
            profiles.extend(finish_section(std::mem::take(&mut files), origin)?);
            mode = parse_mode(line, origin)?;
            sections += 1;
            continue;
        }
        let (name, range) = parse_line(line).ok_or_else(|| CovError::BadLine {
            origin: origin.to_string(),
            line_no: idx + 1,
            line: line.to_string(),
        })?;
        files
            .entry(name.to_string())
            .or_insert_with(|| FileReport::new(name, mode.as_str()))
            .ranges
            .push(range);
    }
    profiles.extend(finish_section(files, origin)?);
    debug!(origin, sections, fragments = profiles.len(), "parsed profile");
    Ok(profiles)
}

/// Folds each file of one section and orders them by name.
fn finish_section(files: HashMap<String, FileReport>, origin: &str) -> Result<Vec<FileReport>> {
    let mut section = files
        .into_values()
        .map(|report| fold_samples(report, origin))
        .collect::<Result<Vec<_>>>()?;
    section.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(section)
}

fn parse_mode(line: &str, origin: &str) -> Result<String> {
    let line = line.trim_end_matches('\r');
    match line.strip_prefix(MODE_PREFIX) {
        Some(mode) if !mode.trim().is_empty() => Ok(mode.trim().to_string()),
        _ => Err(CovError::BadModeLine {
            origin: origin.to_string(),
            line: line.to_string(),
        }),
    }
}

/// Parses a single block line into its file name and range.
#[must_use]
pub fn parse_line(line: &str) -> Option<(&str, Range)> {
    let caps = LINE_RE.captures(line)?;
    let num = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let range = Range::new(
        (num(2)?, num(3)?),
        (num(4)?, num(5)?),
        num(6)?,
        caps.get(7)?.as_str().parse::<u64>().ok()?,
    );
    Some((caps.get(1)?.as_str(), range))
}

fn fold_samples(mut report: FileReport, origin: &str) -> Result<FileReport> {
    let mut ranges = std::mem::take(&mut report.ranges);
    sort_ranges(&mut ranges);

    let set_mode = report.mode == "set";
    let mut folded: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match folded.last_mut() {
            Some(last) if last.same_span(&range) => {
                if last.statements != range.statements {
                    return Err(CovError::InconsistentStatements {
                        origin: origin.to_string(),
                        file: report.file_name,
                        line: range.start_line,
                        col: range.start_col,
                        first: last.statements,
                        second: range.statements,
                    });
                }
                last.hits = if set_mode {
                    last.hits | range.hits
                } else {
                    last.hits.saturating_add(range.hits)
                };
            }
            _ => folded.push(range),
        }
    }

    report.ranges = folded;
    Ok(report)
}
