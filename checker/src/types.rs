//! # Types Module
//!
//! Core data structures shared by the token streams, comparators, and runner:
//! the four-way [`Verdict`], the [`Outcome`] a comparator returns, and the
//! [`Origin`] tag every token stream carries.

use serde::Serialize;
use std::fmt;

/// Terminal classification of a checker run.
///
/// Serialized in `SCREAMING_SNAKE_CASE` (`"OK"`, `"WRONG_ANSWER"`, ...) for the
/// result report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Candidate output accepted.
    Ok,
    /// Candidate output is well formed but substantively wrong.
    WrongAnswer,
    /// Candidate output cannot be read as the expected type.
    PresentationError,
    /// Reference data is malformed or the checker itself failed.
    CheckerFailure,
}

impl Verdict {
    /// Process exit status understood by the judging harness.
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Ok => 0,
            Verdict::WrongAnswer => 1,
            Verdict::PresentationError => 2,
            Verdict::CheckerFailure => 3,
        }
    }

    /// Prefix printed in front of the message on stderr.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Ok => "ok",
            Verdict::WrongAnswer => "wrong answer",
            Verdict::PresentationError => "wrong output format",
            Verdict::CheckerFailure => "FAIL",
        }
    }
}

/// A verdict together with its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub message: String,
}

impl Outcome {
    pub fn new(verdict: Verdict, message: impl Into<String>) -> Self {
        Self {
            verdict,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Verdict::Ok, message)
    }

    pub fn wrong_answer(message: impl Into<String>) -> Self {
        Self::new(Verdict::WrongAnswer, message)
    }

    pub fn presentation_error(message: impl Into<String>) -> Self {
        Self::new(Verdict::PresentationError, message)
    }

    pub fn checker_failure(message: impl Into<String>) -> Self {
        Self::new(Verdict::CheckerFailure, message)
    }

    /// Malformed-token outcome attributed to whichever stream produced the token.
    pub fn malformed(origin: Origin, message: impl Into<String>) -> Self {
        match origin {
            Origin::Answer => Self::checker_failure(message),
            Origin::Output => Self::presentation_error(message),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.verdict == Verdict::Ok
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verdict.label(), self.message)
    }
}

/// Which side of the comparison a token stream belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Trusted reference answer.
    Answer,
    /// Contestant output under judgement.
    Output,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Answer => f.write_str("answer"),
            Origin::Output => f.write_str("output"),
        }
    }
}
