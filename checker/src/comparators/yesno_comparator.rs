//! A comparator for a single case-insensitive `YES` / `NO` token.
//!
//! Case folding is ASCII-only, so look-alike letters from other scripts never
//! fold into `YES` or `NO`.

use crate::error::TokenError;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;
use crate::utilities::format::compress;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YesNoComparator;

fn is_yes_no(word: &str) -> bool {
    word == "YES" || word == "NO"
}

impl Checker for YesNoComparator {
    fn description(&self) -> String {
        "YES or NO (case insensitive)".to_string()
    }

    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError> {
        let expected = answer.read_word()?.to_ascii_uppercase();
        let found = output.read_word()?.to_ascii_uppercase();

        if !is_yes_no(&expected) {
            return Ok(Outcome::checker_failure(format!(
                "YES or NO expected in answer, but {} found",
                compress(&expected)
            )));
        }
        if !is_yes_no(&found) {
            return Ok(Outcome::presentation_error(format!(
                "YES or NO expected, but {} found",
                compress(&found)
            )));
        }

        if expected != found {
            return Ok(Outcome::wrong_answer(format!(
                "expected {expected}, found {found}"
            )));
        }
        Ok(Outcome::ok(format!("answer is {expected}")))
    }
}
