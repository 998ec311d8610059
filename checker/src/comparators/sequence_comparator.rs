//! A comparator for ordered sequences of arbitrary-precision signed integers.
//!
//! Tokens are compared as canonical decimal strings, so values of any length
//! are supported. **Order matters**: the n-th answer token is only ever compared
//! with the n-th output token.
//!
//! Tokens inside the common prefix are validated against the integer grammar on
//! both sides (answer first). Tokens past the common length are only counted,
//! each read as a 64-bit integer, before the length mismatch is reported.

use crate::error::TokenError;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;
use crate::utilities::format::{compress, english_ending};
use crate::utilities::numeric::is_integer;
use tracing::debug;

/// Compares two whitespace-separated sequences of huge integers element by element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceComparator;

/// Reads and counts every remaining integer in `reader`.
fn drain(reader: &mut dyn TokenReader) -> Result<usize, TokenError> {
    let mut count = 0;
    while !reader.seek_eof() {
        reader.read_long()?;
        count += 1;
    }
    Ok(count)
}

impl Checker for SequenceComparator {
    fn description(&self) -> String {
        "compare ordered sequences of two signed huge integers".to_string()
    }

    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError> {
        let mut n: usize = 0;
        let mut first = String::new();

        while !answer.seek_eof() && !output.seek_eof() {
            n += 1;
            let expected = answer.read_word()?;
            let found = output.read_word()?;

            if !is_integer(&expected) {
                return Ok(Outcome::checker_failure(format!(
                    "{} is not a valid integer",
                    compress(&expected)
                )));
            }
            if !is_integer(&found) {
                return Ok(Outcome::presentation_error(format!(
                    "{} is not a valid integer",
                    compress(&found)
                )));
            }

            if expected != found {
                debug!(position = n, "sequence element mismatch");
                return Ok(Outcome::wrong_answer(format!(
                    "{n}{} numbers differ - expected '{}', found '{}'",
                    english_ending(n),
                    compress(&expected),
                    compress(&found)
                )));
            }
            if n <= 1 {
                first = expected;
            }
        }

        let extra_in_answer = drain(answer)?;
        let extra_in_output = drain(output)?;
        debug!(n, extra_in_answer, extra_in_output, "sequence scan finished");

        if extra_in_answer > 0 {
            return Ok(Outcome::wrong_answer(format!(
                "Answer contains longer sequence [length = {}], but output contains {n} elements",
                n + extra_in_answer
            )));
        }
        if extra_in_output > 0 {
            return Ok(Outcome::wrong_answer(format!(
                "Output contains longer sequence [length = {}], but answer contains {n} elements",
                n + extra_in_output
            )));
        }

        if n == 1 {
            Ok(Outcome::ok(format!("{n} number: \"{}\"", compress(&first))))
        } else {
            Ok(Outcome::ok(format!("{n} numbers")))
        }
    }
}
