// src/cli/merge_handler.rs
//! Handler for the merge run: load, filter, merge, write.

use crate::config::Config;
use crate::exit::CovExit;
use crate::filter::ExclusionFilter;
use crate::input;
use crate::merge::merge_filtered;
use crate::profile::write_reports;
use anyhow::{Context, Result};
use std::io::{BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::info;

/// Merges the profiles named by `inputs` and writes the result to `out`.
///
/// # Errors
/// Returns error if an input cannot be loaded, the exclusion file is invalid,
/// or writing fails.
pub fn handle_merge<R: Read, W: Write>(
    inputs: &[PathBuf],
    config: &Config,
    stdin: R,
    out: W,
) -> Result<CovExit> {
    let fragments = input::load_inputs(inputs, stdin)?;
    let filter = ExclusionFilter::from_file(&config.exclude_file)?;

    let merged = merge_filtered(&fragments, |name| filter.keeps(name));
    let ranges: usize = merged.iter().map(|r| r.ranges.len()).sum();
    info!(
        fragments = fragments.len(),
        files = merged.len(),
        ranges,
        excluding = filter.is_active(),
        "merged profiles"
    );

    let mut out = BufWriter::new(out);
    write_reports(&merged, config.format, &mut out).context("failed to write merged profile")?;
    out.flush().context("failed to write merged profile")?;
    Ok(CovExit::Success)
}
