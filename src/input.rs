// src/input.rs
//! Loads cover profiles from the command-line inputs.

use crate::error::{CovError, Result};
use crate::profile::parse_profiles;
use crate::types::FileReport;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Input argument that stands for standard input.
pub const STDIN_ARG: &str = "-";

/// Returns true if `arg` names standard input.
#[must_use]
pub fn is_stdin(arg: &Path) -> bool {
    arg.as_os_str() == STDIN_ARG
}

/// Loads every input named in `args`.
///
/// Standard input is read at most once, however many times `-` appears, and
/// its profiles come first. Files follow in argument order.
///
/// # Errors
/// Returns [`CovError::NoInputs`] for an empty argument list, or the first
/// read/parse error encountered.
pub fn load_inputs<R: Read>(args: &[PathBuf], stdin: R) -> Result<Vec<FileReport>> {
    if args.is_empty() {
        return Err(CovError::NoInputs);
    }

    let (stdin_args, files): (Vec<&PathBuf>, Vec<&PathBuf>) =
        args.iter().partition(|a| is_stdin(a));

    let mut profiles = Vec::new();
    if !stdin_args.is_empty() {
        profiles.extend(parse_profiles(BufReader::new(stdin), "<stdin>")?);
    }
    profiles.extend(load_files(&files)?);

    debug!(inputs = args.len(), fragments = profiles.len(), "loaded inputs");
    Ok(profiles)
}

/// Parses each file in order and concatenates the results.
///
/// # Errors
/// Returns error if a file cannot be opened or does not parse.
pub fn load_files<P: AsRef<Path>>(files: &[P]) -> Result<Vec<FileReport>> {
    let mut profiles = Vec::new();
    for path in files {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| CovError::io(path, e))?;
        let origin = path.display().to_string();
        profiles.extend(parse_profiles(BufReader::new(file), &origin)?);
    }
    Ok(profiles)
}
