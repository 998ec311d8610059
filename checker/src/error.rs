//! Checker Error Types
//!
//! Two error families live here:
//!
//! - [`TokenError`]: a typed read from a token stream failed. It remembers which
//!   stream it came from, and converts into the matching [`Outcome`]: reference
//!   faults become `CHECKER_FAILURE`, candidate faults become `PRESENTATION_ERROR`.
//! - [`CheckerError`]: an operational failure around a check (missing files,
//!   oversized input, report I/O, unknown method). None of these is the
//!   contestant's fault, so the entry point reports each as `CHECKER_FAILURE`.
//!
//! # Example
//!
//! ```rust
//! use checker::error::TokenError;
//! use checker::types::{Origin, Outcome, Verdict};
//!
//! let err = TokenError::UnexpectedEof { origin: Origin::Output, expected: "integer" };
//! let outcome: Outcome = err.into();
//! assert_eq!(outcome.verdict, Verdict::PresentationError);
//! ```

use crate::types::{Origin, Outcome};
use std::path::PathBuf;
use thiserror::Error;

/// A typed read from a token stream failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The stream ran out before a token could be read.
    #[error("Unexpected end of file - {expected} expected")]
    UnexpectedEof {
        origin: Origin,
        expected: &'static str,
    },
    /// A token was read but does not match the requested type.
    #[error("Expected {expected}, but \"{found}\" found")]
    Malformed {
        origin: Origin,
        expected: &'static str,
        found: String,
    },
}

impl TokenError {
    pub fn origin(&self) -> Origin {
        match self {
            TokenError::UnexpectedEof { origin, .. } | TokenError::Malformed { origin, .. } => {
                *origin
            }
        }
    }
}

impl From<TokenError> for Outcome {
    fn from(err: TokenError) -> Self {
        Outcome::malformed(err.origin(), err.to_string())
    }
}

/// Represents all operational errors that can occur around a check.
#[derive(Debug, Error)]
pub enum CheckerError {
    /// A required file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The path exists but is not a regular file.
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),
    /// The file exceeds the configured input limit.
    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },
    /// Reading a file failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Writing the result report failed.
    #[error("Failed to write report {}: {reason}", .path.display())]
    Report { path: PathBuf, reason: String },
    /// The requested check method is not known.
    #[error("check method value error: {0}")]
    UnknownMethod(String),
}
