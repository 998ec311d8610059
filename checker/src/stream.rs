//! In-memory token stream.
//!
//! Answer and output files are small enough to hold in memory, so a stream is
//! just the file text plus a cursor. Tokens are maximal runs of non-whitespace
//! characters.

use crate::error::TokenError;
use crate::traits::token_reader::TokenReader;
use crate::types::Origin;
use crate::utilities::format::compress;
use crate::utilities::numeric::{is_integer, parse_double};
use tracing::trace;

/// A [`TokenReader`] over an owned string.
#[derive(Debug, Clone)]
pub struct TokenStream {
    data: String,
    pos: usize,
    origin: Origin,
}

impl TokenStream {
    pub fn new(data: impl Into<String>, origin: Origin) -> Self {
        Self {
            data: data.into(),
            pos: 0,
            origin,
        }
    }

    /// Builds a stream from raw bytes, replacing invalid UTF-8 sequences.
    pub fn from_bytes(bytes: &[u8], origin: Origin) -> Self {
        Self::new(String::from_utf8_lossy(bytes).into_owned(), origin)
    }

    fn skip_blanks(&mut self) {
        let rest = &self.data[self.pos..];
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn next_token(&mut self) -> Option<String> {
        self.skip_blanks();
        let rest = &self.data[self.pos..];
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        self.pos += end;
        let token = rest[..end].to_string();
        trace!(origin = %self.origin, token = %token, "read token");
        Some(token)
    }

    fn expect_token(&mut self, expected: &'static str) -> Result<String, TokenError> {
        self.next_token().ok_or(TokenError::UnexpectedEof {
            origin: self.origin,
            expected,
        })
    }

    fn malformed(&self, expected: &'static str, token: &str) -> TokenError {
        TokenError::Malformed {
            origin: self.origin,
            expected,
            found: compress(token),
        }
    }

    fn read_integer<T: std::str::FromStr>(&mut self) -> Result<T, TokenError> {
        let token = self.expect_token("integer")?;
        if !is_integer(&token) {
            return Err(self.malformed("integer", &token));
        }
        token
            .parse::<T>()
            .map_err(|_| self.malformed("integer", &token))
    }
}

impl TokenReader for TokenStream {
    fn origin(&self) -> Origin {
        self.origin
    }

    fn seek_eof(&mut self) -> bool {
        self.skip_blanks();
        self.pos >= self.data.len()
    }

    fn read_word(&mut self) -> Result<String, TokenError> {
        self.expect_token("token")
    }

    fn read_long(&mut self) -> Result<i64, TokenError> {
        self.read_integer()
    }

    fn read_int(&mut self) -> Result<i32, TokenError> {
        self.read_integer()
    }

    fn read_double(&mut self) -> Result<f64, TokenError> {
        let token = self.expect_token("double")?;
        parse_double(&token).ok_or_else(|| self.malformed("double", &token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let mut s = TokenStream::new("  a\tb\r\n\nc  ", Origin::Answer);
        assert_eq!(s.read_word().unwrap(), "a");
        assert_eq!(s.read_word().unwrap(), "b");
        assert!(!s.seek_eof());
        assert_eq!(s.read_word().unwrap(), "c");
        assert!(s.seek_eof());
    }

    #[test]
    fn empty_and_blank_streams_are_at_eof() {
        assert!(TokenStream::new("", Origin::Output).seek_eof());
        assert!(TokenStream::new(" \n\t ", Origin::Output).seek_eof());
    }

    #[test]
    fn reading_past_end_reports_origin() {
        let mut s = TokenStream::new("\n", Origin::Output);
        let err = s.read_long().unwrap_err();
        assert_eq!(
            err,
            TokenError::UnexpectedEof {
                origin: Origin::Output,
                expected: "integer"
            }
        );
    }

    #[test]
    fn reads_integers_at_both_widths() {
        let mut s = TokenStream::new(
            "-9223372036854775808 2147483647 2147483648",
            Origin::Answer,
        );
        assert_eq!(s.read_long().unwrap(), i64::MIN);
        assert_eq!(s.read_int().unwrap(), i32::MAX);
        let err = s.read_int().unwrap_err();
        assert_eq!(err.origin(), Origin::Answer);
        assert_eq!(err.to_string(), "Expected integer, but \"2147483648\" found");
    }

    #[test]
    fn rejects_non_canonical_integers() {
        let mut s = TokenStream::new("007 -0 +5", Origin::Output);
        assert!(s.read_long().is_err());
        assert!(s.read_long().is_err());
        assert!(s.read_long().is_err());
        assert!(s.seek_eof());
    }

    #[test]
    fn long_overflow_is_malformed() {
        let mut s = TokenStream::new("99999999999999999999", Origin::Output);
        assert!(matches!(
            s.read_long(),
            Err(TokenError::Malformed { .. })
        ));
    }

    #[test]
    fn reads_doubles() {
        let mut s = TokenStream::new("3.14159 -1e-3 x", Origin::Output);
        assert_eq!(s.read_double().unwrap(), 3.14159);
        assert_eq!(s.read_double().unwrap(), -0.001);
        assert_eq!(
            s.read_double().unwrap_err().to_string(),
            "Expected double, but \"x\" found"
        );
    }

    #[test]
    fn malformed_token_is_compressed() {
        let long = "x".repeat(100);
        let mut s = TokenStream::new(long, Origin::Answer);
        let err = s.read_double().unwrap_err();
        match err {
            TokenError::Malformed { found, .. } => assert_eq!(found.len(), 63),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut s = TokenStream::from_bytes(b"1 \xff 2", Origin::Output);
        assert_eq!(s.read_long().unwrap(), 1);
        assert_eq!(s.read_word().unwrap(), "\u{fffd}");
        assert_eq!(s.read_long().unwrap(), 2);
    }
}
