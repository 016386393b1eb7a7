// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed when no inputs are given.
pub const USAGE: &str = "usage: covdedup [<file1> <file2> ... <fileN>|-]
files must be in go cover format or if '-' is supplied then read from stdin";

#[derive(Debug, Error)]
pub enum CovError {
    #[error("{path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{origin}: bad mode line: {line:?}")]
    BadModeLine { origin: String, line: String },

    #[error("{origin}:{line_no}: line {line:?} doesn't match expected format")]
    BadLine {
        origin: String,
        line_no: usize,
        line: String,
    },

    #[error("{origin}: inconsistent statement count for {file}:{line}.{col}: {first} vs {second}")]
    InconsistentStatements {
        origin: String,
        file: String,
        line: u32,
        col: u32,
        first: u32,
        second: u32,
    },

    #[error("unable to read exclusion file {path}: {message}")]
    Exclusion { path: PathBuf, message: String },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("{}", USAGE)]
    NoInputs,
}

impl CovError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CovError>;
