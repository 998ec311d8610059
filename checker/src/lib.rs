//! # Checker Library
//!
//! Output checkers for an automated judging system. A checker reads a reference
//! answer and a contestant output as whitespace-delimited token streams and
//! decides whether the output is acceptable.
//!
//! ## Key Concepts
//! - **CheckJob**: one run over an input/output/answer file triple.
//! - **Comparators**: pluggable [`Checker`] strategies (tolerance doubles, exact
//!   integers, huge-integer sequences, ...), selected by [`CheckMethod`].
//! - **Verdicts**: every run ends in exactly one of OK, WRONG_ANSWER,
//!   PRESENTATION_ERROR or CHECKER_FAILURE. Malformed reference data is always a
//!   checker failure; malformed contestant output is a presentation error.
//! - **Reports**: a [`CheckReport`] that the binaries print, optionally write
//!   as JSON, and turn into the process exit status.

pub mod cli;
pub mod comparators;
pub mod error;
pub mod registry;
pub mod report;
pub mod stream;
pub mod traits;
pub mod types;
pub mod utilities;

use crate::error::CheckerError;
use crate::report::CheckReport;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::{Origin, Outcome};
use crate::utilities::file_loader::{check_file, load_stream};
use common::config::DEFAULT_MAX_INPUT_BYTES;
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub use crate::registry::CheckMethod;
pub use crate::types::Verdict;

/// Message used when a comparator accepts but output tokens remain.
pub const EXTRA_OUTPUT_MESSAGE: &str = "Extra information in the output file";

/// Runs `checker` over two token streams and settles the final outcome.
///
/// Read failures are classified by the stream they came from. An accepted
/// output must also be fully consumed; leftover tokens turn OK into a
/// presentation error.
pub fn judge(
    checker: &dyn Checker,
    answer: &mut dyn TokenReader,
    output: &mut dyn TokenReader,
) -> Outcome {
    let outcome = checker.check(answer, output).unwrap_or_else(|err| {
        debug!(origin = %err.origin(), "token read failed: {}", err);
        Outcome::from(err)
    });

    if outcome.is_ok() && !output.seek_eof() {
        debug!(origin = %output.origin(), "tokens left after an accepted answer");
        return Outcome::presentation_error(EXTRA_OUTPUT_MESSAGE);
    }
    outcome
}

/// A single checker run over files on disk.
///
/// # Fields
/// - `input`: the test input; must exist, never read by the comparators.
/// - `output`: the contestant output.
/// - `answer`: the reference answer.
/// - `checker`: comparator strategy, [`CheckMethod::Long`] unless overridden.
/// - `max_input_bytes`: size limit for `output` and `answer`.
pub struct CheckJob {
    input: PathBuf,
    output: PathBuf,
    answer: PathBuf,
    checker: Box<dyn Checker>,
    max_input_bytes: u64,
}

impl CheckJob {
    pub fn new(input: PathBuf, output: PathBuf, answer: PathBuf) -> Self {
        Self {
            input,
            output,
            answer,
            checker: CheckMethod::Long.checker(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }

    /// Set a custom comparator for this job.
    pub fn with_checker<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checker = Box::new(checker);
        self
    }

    /// Use the comparator registered for `method`.
    pub fn with_method(mut self, method: CheckMethod) -> Self {
        self.checker = method.checker();
        self
    }

    pub fn with_max_input_bytes(mut self, max: u64) -> Self {
        self.max_input_bytes = max;
        self
    }

    pub fn description(&self) -> String {
        self.checker.description()
    }

    /// Loads the files, runs the comparator, and builds the report.
    ///
    /// # Errors
    /// Returns [`CheckerError`] when a file is missing, unreadable or too large.
    /// Verdicts, including checker failures caused by bad reference data, are
    /// returned inside the report.
    pub fn run(self) -> Result<CheckReport, CheckerError> {
        let description = self.checker.description();
        info!(checker = %description, "starting check");

        check_file(&self.input, None)?;
        let mut answer = load_stream(&self.answer, Origin::Answer, self.max_input_bytes)?;
        let mut output = load_stream(&self.output, Origin::Output, self.max_input_bytes)?;

        let outcome = judge(self.checker.as_ref(), &mut answer, &mut output);
        if outcome.is_ok() {
            info!("{}", outcome);
        } else {
            warn!("{}", outcome);
        }

        Ok(CheckReport::new(description, outcome))
    }
}
