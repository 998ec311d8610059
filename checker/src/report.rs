//! # Check Report Module
//!
//! The serializable result of one checker run, written to the optional report
//! path given on the command line.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "checker": "compare two signed int64's",
//!   "verdict": "WRONG_ANSWER",
//!   "message": "expected 1, found 2",
//!   "exit_code": 1
//! }
//! ```

use crate::error::CheckerError;
use crate::types::{Outcome, Verdict};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::error;

/// Final report for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Description of the comparator that produced the verdict.
    pub checker: String,
    pub verdict: Verdict,
    pub message: String,
    /// Exit status the process terminates with.
    pub exit_code: u8,
}

impl CheckReport {
    pub fn new(checker: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            checker: checker.into(),
            exit_code: outcome.verdict.exit_code(),
            verdict: outcome.verdict,
            message: outcome.message,
        }
    }

    /// Report for a run that failed before a comparator could decide.
    pub fn failure(checker: impl Into<String>, err: &CheckerError) -> Self {
        Self::new(checker, Outcome::checker_failure(err.to_string()))
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.verdict, self.message.clone())
    }

    /// Serializes the report as pretty JSON to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), CheckerError> {
        let report_err = |reason: String| {
            error!("Failed to write report {}: {}", path.display(), reason);
            CheckerError::Report {
                path: path.to_path_buf(),
                reason,
            }
        };

        let json = serde_json::to_string_pretty(self).map_err(|e| report_err(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| report_err(e.to_string()))?;
            }
        }
        fs::write(path, json).map_err(|e| report_err(e.to_string()))
    }
}
