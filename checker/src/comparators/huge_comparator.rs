//! A comparator for one arbitrary-precision signed integer.

use crate::error::TokenError;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;
use crate::utilities::format::compress;
use crate::utilities::numeric::is_integer;

/// Reads one word per side, validates it as a canonical integer, and compares the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HugeComparator;

impl Checker for HugeComparator {
    fn description(&self) -> String {
        "compare two signed huge integers".to_string()
    }

    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError> {
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
            return Ok(Outcome::wrong_answer(format!(
                "expected {}, found {}",
                compress(&expected),
                compress(&found)
            )));
        }
        Ok(Outcome::ok(format!("answer is {}", compress(&expected))))
    }
}
