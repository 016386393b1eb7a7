// src/filter.rs
//! Drops profiles whose file names match a gitignore-style exclusion file.

use crate::error::{CovError, Result};
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Gitignore-style matcher over profile file names.
///
/// An inactive filter (no pattern file) keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    gitignore: Option<Gitignore>,
}

impl ExclusionFilter {
    /// A filter that keeps every file.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Loads patterns from `path`. A missing path yields an inactive filter.
    ///
    /// # Errors
    /// Returns error if the path exists but cannot be read as a pattern file
    /// (a directory, for instance) or holds an invalid pattern.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no exclusion file, keeping all profiles");
            return Ok(Self::none());
        }

        let root = path.parent().unwrap_or(Path::new("."));
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(path) {
            return Err(exclusion_error(path, &err));
        }
        let gitignore = builder.build().map_err(|e| exclusion_error(path, &e))?;
        debug!(path = %path.display(), patterns = gitignore.len(), "loaded exclusion file");
        Ok(Self {
            gitignore: Some(gitignore),
        })
    }

    /// Returns true if a pattern file is in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gitignore.is_some()
    }

    /// Returns true if `file_name`, or any directory above it, is excluded.
    #[must_use]
    pub fn is_excluded(&self, file_name: &str) -> bool {
        let Some(gitignore) = &self.gitignore else {
            return false;
        };
        let relative = relative_name(file_name);
        if relative.as_os_str().is_empty() {
            return false;
        }
        gitignore
            .matched_path_or_any_parents(&relative, false)
            .is_ignore()
    }

    #[must_use]
    pub fn keeps(&self, file_name: &str) -> bool {
        !self.is_excluded(file_name)
    }

}

/// Cover profiles name files by import path or absolute path; patterns are
/// matched against the name with any root or prefix stripped.
fn relative_name(file_name: &str) -> PathBuf {
    Path::new(file_name)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

fn exclusion_error(path: &Path, err: &ignore::Error) -> CovError {
    CovError::Exclusion {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
