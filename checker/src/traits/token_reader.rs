//! Token Reader Trait
//!
//! [`TokenReader`] is the read side every comparator sees. The production
//! implementation is [`crate::stream::TokenStream`]; tests may supply any other
//! implementation, since comparators only ever hold a `&mut dyn TokenReader`.

use crate::error::TokenError;
use crate::types::Origin;

/// A read-once sequence of whitespace-delimited tokens.
pub trait TokenReader {
    /// Which side of the comparison this stream belongs to.
    fn origin(&self) -> Origin;

    /// Skips whitespace and reports whether the stream is exhausted.
    fn seek_eof(&mut self) -> bool;

    /// Reads the next whitespace-delimited token verbatim.
    fn read_word(&mut self) -> Result<String, TokenError>;

    /// Reads a canonical decimal integer that fits in `i64`.
    fn read_long(&mut self) -> Result<i64, TokenError>;

    /// Reads a canonical decimal integer that fits in `i32`.
    fn read_int(&mut self) -> Result<i32, TokenError>;

    /// Reads a finite floating-point number.
    fn read_double(&mut self) -> Result<f64, TokenError>;
}
