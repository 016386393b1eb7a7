// src/config/mod.rs
pub mod types;

pub use self::types::{Config, CONFIG_FILE, DEFAULT_EXCLUDE_FILE};

use crate::error::{CovError, Result};
use crate::profile::OutputFormat;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `covdedup.toml` from the working directory, or defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but is not valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Loads `covdedup.toml` from `dir`. A relative `exclude_file` is resolved
    /// against `dir`.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let mut config = match fs::read_to_string(&path) {
            Ok(content) => Self::parse_toml(&content, &path)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::new(),
            Err(e) => return Err(CovError::io(path, e)),
        };
        if config.exclude_file.is_relative() {
            config.exclude_file = dir.join(&config.exclude_file);
        }
        debug!(
            exclude_file = %config.exclude_file.display(),
            format = ?config.format,
            "loaded config"
        );
        Ok(config)
    }

    /// Parses config text. `path` is only used in error messages.
    ///
    /// # Errors
    /// Returns error if `content` is not valid TOML for this config.
    pub fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| CovError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Applies command-line overrides on top of file settings.
    pub fn apply_overrides(&mut self, exclude_file: Option<PathBuf>, format: Option<OutputFormat>) {
        if let Some(path) = exclude_file {
            self.exclude_file = path;
        }
        if let Some(format) = format {
            self.format = format;
        }
    }
}
