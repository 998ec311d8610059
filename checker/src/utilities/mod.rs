//! # Utilities
//!
//! Helpers shared by the token streams and comparators:
//! - [`file_loader`]: validated loading of answer and output files into token streams.
//! - [`format`]: message formatting (token compression, English ordinal suffixes).
//! - [`numeric`]: integer and floating-point token grammars.

pub mod file_loader;
pub mod format;
pub mod numeric;
