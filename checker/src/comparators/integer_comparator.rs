//! A comparator that requires two signed integers to be identical.
//!
//! The width decides which read is used: `long` reads 64-bit values and `int`
//! reads 32-bit values. Tokens must be canonical decimal and in range; anything
//! else is a malformed token for the stream it came from.

use crate::error::TokenError;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;
use tracing::debug;

/// Bit width of the integers being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerWidth {
    Int32,
    Int64,
}

impl IntegerWidth {
    fn bits(self) -> u32 {
        match self {
            IntegerWidth::Int32 => 32,
            IntegerWidth::Int64 => 64,
        }
    }

    fn read(self, reader: &mut dyn TokenReader) -> Result<i64, TokenError> {
        match self {
            IntegerWidth::Int32 => reader.read_int().map(i64::from),
            IntegerWidth::Int64 => reader.read_long(),
        }
    }
}

/// Reads one integer from each stream and requires exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerComparator {
    width: IntegerWidth,
}

impl IntegerComparator {
    pub const fn new(width: IntegerWidth) -> Self {
        Self { width }
    }

    pub const fn long() -> Self {
        Self::new(IntegerWidth::Int64)
    }

    pub const fn int() -> Self {
        Self::new(IntegerWidth::Int32)
    }
}

impl Checker for IntegerComparator {
    fn description(&self) -> String {
        format!("compare two signed int{}'s", self.width.bits())
    }

    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError> {
        let expected = self.width.read(answer)?;
        let found = self.width.read(output)?;
        debug!(expected, found, "comparing integers");

        if expected != found {
            return Ok(Outcome::wrong_answer(format!(
                "expected {expected}, found {found}"
            )));
        }
        Ok(Outcome::ok(format!("answer is {expected}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::TokenStream;
    use crate::types::{Origin, Verdict};

    fn run(comparator: IntegerComparator, answer: &str, output: &str) -> Outcome {
        let mut ans = TokenStream::new(answer, Origin::Answer);
        let mut ouf = TokenStream::new(output, Origin::Output);
        comparator
            .check(&mut ans, &mut ouf)
            .unwrap_or_else(Outcome::from)
    }

    #[test]
    fn equal_values_are_accepted() {
        let result = run(IntegerComparator::long(), "-42\n", "  -42");
        assert_eq!(result, Outcome::ok("answer is -42"));
    }

    #[test]
    fn extreme_values_are_compared_exactly() {
        let result = run(
            IntegerComparator::long(),
            "9223372036854775807",
            "9223372036854775806",
        );
        assert_eq!(
            result,
            Outcome::wrong_answer("expected 9223372036854775807, found 9223372036854775806")
        );
    }

    #[test]
    fn different_values_are_wrong_answer() {
        let result = run(IntegerComparator::long(), "1", "2");
        assert_eq!(result, Outcome::wrong_answer("expected 1, found 2"));
    }

    #[test]
    fn malformed_answer_is_checker_failure() {
        let result = run(IntegerComparator::long(), "1.5", "1");
        assert_eq!(result.verdict, Verdict::CheckerFailure);
    }

    #[test]
    fn malformed_output_is_presentation_error() {
        let result = run(IntegerComparator::long(), "1", "one");
        assert_eq!(
            result,
            Outcome::presentation_error("Expected integer, but \"one\" found")
        );
    }

    #[test]
    fn int_width_rejects_64_bit_values() {
        let result = run(IntegerComparator::int(), "5", "4294967296");
        assert_eq!(result.verdict, Verdict::PresentationError);
        let result = run(IntegerComparator::int(), "-2147483648", "-2147483648");
        assert_eq!(result, Outcome::ok("answer is -2147483648"));
    }

    #[test]
    fn descriptions_name_the_width() {
        assert_eq!(
            IntegerComparator::long().description(),
            "compare two signed int64's"
        );
        assert_eq!(
            IntegerComparator::int().description(),
            "compare two signed int32's"
        );
    }
}
