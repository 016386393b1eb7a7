//! Merge Go cover profiles into one canonical report per file.
//!
//! Profiles from several test runs often cover the same or overlapping source
//! regions. [`merge`] groups them by file, sorts each file's ranges, and
//! collapses overlapping or touching ranges into one, keeping the maximum
//! statement and hit counts.

pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod filter;
pub mod input;
pub mod logging;
pub mod merge;
pub mod profile;
pub mod types;

pub use error::{CovError, Result};
pub use merge::{merge, merge_filtered};
pub use types::{FileReport, Range};
