//! Token grammars for numeric reads.
//!
//! Integers must be canonical decimal: an optional single `-`, no leading zeros,
//! and `0` only on its own (so `-0`, `01` and `+1` are rejected). Floating-point
//! tokens allow an optional sign, a fraction, and an exponent.

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0|-?[1-9][0-9]*)$").expect("integer pattern is valid"));

static DOUBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("double pattern is valid")
});

/// True if `token` is a canonical signed decimal integer of any length.
pub fn is_integer(token: &str) -> bool {
    INTEGER.is_match(token)
}

/// Parses a floating-point token into a finite `f64`, or `None`.
pub fn parse_double(token: &str) -> Option<f64> {
    if !DOUBLE.is_match(token) {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}
