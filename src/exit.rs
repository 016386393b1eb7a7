// src/exit.rs
//! Process exit codes for `covdedup`.

use crate::error::CovError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CovExit {
    /// Merged profile written.
    Success = 0,
    /// Unreadable input, malformed profile, bad exclusion or config file.
    Error = 1,
    /// No inputs given; usage printed.
    Usage = 99,
}

impl CovExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CovError>() {
            Some(CovError::NoInputs) => Self::Usage,
            _ => Self::Error,
        }
    }
}

impl Termination for CovExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
