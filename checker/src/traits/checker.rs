use crate::error::TokenError;
use crate::traits::token_reader::TokenReader;
use crate::types::Outcome;

/// Checker is a strategy trait for judging one candidate output.
/// Each implementation reads what it needs from the two streams and decides.
pub trait Checker: Send + Sync {
    /// Human-readable description, e.g. `compare two signed int64's`.
    fn description(&self) -> String;

    /// Compare the candidate stream against the reference stream.
    ///
    /// - `answer`: reference tokens.
    /// - `output`: candidate tokens.
    ///
    /// Returns the verdict the comparator reached. A failed typed read is
    /// returned as `Err` and classified by the stream it came from.
    fn check(
        &self,
        answer: &mut dyn TokenReader,
        output: &mut dyn TokenReader,
    ) -> Result<Outcome, TokenError>;
}
