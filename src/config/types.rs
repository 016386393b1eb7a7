use crate::profile::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "covdedup.toml";

/// Exclusion file used when neither the config nor the CLI names one.
pub const DEFAULT_EXCLUDE_FILE: &str = ".covignore";

/// Settings from `covdedup.toml`, overridable from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Gitignore-style file listing profile file names to drop.
    #[serde(default = "default_exclude_file")]
    pub exclude_file: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_file: default_exclude_file(),
            format: OutputFormat::default(),
        }
    }
}

fn default_exclude_file() -> PathBuf {
    PathBuf::from(DEFAULT_EXCLUDE_FILE)
}
