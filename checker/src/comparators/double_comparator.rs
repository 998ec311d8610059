//! A comparator for a single floating-point value with combined absolute or relative tolerance.
//!
//! The candidate is accepted when `|a - b| <= eps` or `|a - b| / max(1, |a|) <= eps`,
//! where `a` is the reference value. Two presets exist: [`DoubleComparator::double4`]
//! (`eps = 1e-4`) and [`DoubleComparator::double6`] (`eps = 1e-6`).

use crate::error::TokenError;
use crate::traits::checker::Checker;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;
use tracing::debug;

/// Absorbs representation error when a difference lands exactly on `eps`.
const SLACK: f64 = 1e-15;

/// Reads one double from each stream and compares them within `eps`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleComparator {
    eps: f64,
    precision: usize,
}

impl DoubleComparator {
    /// `precision` is the number of fractional digits used in messages.
    pub const fn new(eps: f64, precision: usize) -> Self {
        Self { eps, precision }
    }

    pub const fn double4() -> Self {
        Self::new(1e-4, 5)
    }

    pub const fn double6() -> Self {
        Self::new(1e-6, 7)
    }
}

/// Combined absolute-or-relative tolerance test.
pub fn within_tolerance(expected: f64, found: f64, eps: f64) -> bool {
    let diff = (expected - found).abs();
    if diff <= eps + SLACK {
        return true;
    }
    diff / expected.abs().max(1.0) <= eps + SLACK
}

impl Checker for DoubleComparator {
    fn description(&self) -> String {
        format!(
            "compare two doubles, maximal absolute or relative error = {:.*}",
            self.precision, self.eps
        )
    }

    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError> {
        let expected = answer.read_double()?;
        let found = output.read_double()?;
        debug!(expected, found, eps = self.eps, "comparing doubles");

        let p = self.precision;
        if !within_tolerance(expected, found, self.eps) {
            return Ok(Outcome::wrong_answer(format!(
                "expected {expected:.p$}, found {found:.p$}"
            )));
        }
        Ok(Outcome::ok(format!("answer is {expected:.p$}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::TokenStream;
    use crate::types::{Origin, Verdict};

    fn run(comparator: DoubleComparator, answer: &str, output: &str) -> Outcome {
        let mut ans = TokenStream::new(answer, Origin::Answer);
        let mut ouf = TokenStream::new(output, Origin::Output);
        comparator
            .check(&mut ans, &mut ouf)
            .unwrap_or_else(Outcome::from)
    }

    #[test]
    fn equal_values_are_accepted() {
        let result = run(DoubleComparator::double4(), "2.5", "2.5");
        assert_eq!(result, Outcome::ok("answer is 2.50000"));
    }

    #[test]
    fn absolute_error_within_eps_is_accepted() {
        let result = run(DoubleComparator::double4(), "0.5", "0.50009");
        assert!(result.is_ok());
        let result = run(DoubleComparator::double6(), "0.5", "0.5000009");
        assert_eq!(result, Outcome::ok("answer is 0.5000000"));
    }

    #[test]
    fn relative_error_within_eps_is_accepted() {
        // |diff| = 50 exceeds eps absolutely but is 5e-5 relative to 1e6.
        let result = run(DoubleComparator::double4(), "1000000", "1000050");
        assert!(result.is_ok());
    }

    #[test]
    fn error_beyond_both_bounds_is_wrong_answer() {
        let result = run(DoubleComparator::double4(), "1.0", "1.001");
        assert_eq!(
            result,
            Outcome::wrong_answer("expected 1.00000, found 1.00100")
        );
        let result = run(DoubleComparator::double6(), "1000000", "1000002");
        assert_eq!(result.verdict, Verdict::WrongAnswer);
        assert_eq!(
            result.message,
            "expected 1000000.0000000, found 1000002.0000000"
        );
    }

    #[test]
    fn boundary_difference_is_accepted() {
        assert!(within_tolerance(0.0, 1e-4, 1e-4));
        assert!(within_tolerance(0.1, 0.1001, 1e-4));
        assert!(!within_tolerance(0.0, 1.1e-4, 1e-4));
    }

    #[test]
    fn malformed_answer_is_checker_failure() {
        let result = run(DoubleComparator::double6(), "abc", "1.0");
        assert_eq!(result.verdict, Verdict::CheckerFailure);
        assert_eq!(result.message, "Expected double, but \"abc\" found");
    }

    #[test]
    fn malformed_output_is_presentation_error() {
        let result = run(DoubleComparator::double6(), "1.0", "1,0");
        assert_eq!(result.verdict, Verdict::PresentationError);
    }

    #[test]
    fn empty_output_is_presentation_error() {
        let result = run(DoubleComparator::double4(), "1.0", "");
        assert_eq!(
            result,
            Outcome::presentation_error("Unexpected end of file - double expected")
        );
    }

    #[test]
    fn descriptions_show_eps() {
        assert_eq!(
            DoubleComparator::double4().description(),
            "compare two doubles, maximal absolute or relative error = 0.00010"
        );
        assert_eq!(
            DoubleComparator::double6().description(),
            "compare two doubles, maximal absolute or relative error = 0.0000010"
        );
    }
}
