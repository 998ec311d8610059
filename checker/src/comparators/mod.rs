//! # Comparators
//!
//! Each comparator implements [`Checker`](crate::traits::checker::Checker) and
//! judges one candidate output against one reference answer.
//!
//! The available comparators are:
//! - [`double_comparator`]: one double, combined absolute/relative tolerance.
//! - [`integer_comparator`]: one signed 32- or 64-bit integer, exact.
//! - [`huge_comparator`]: one arbitrary-precision integer, exact.
//! - [`sequence_comparator`]: ordered sequences of arbitrary-precision integers.
//! - [`yesno_comparator`]: one case-insensitive YES/NO token.

pub mod double_comparator;
pub mod huge_comparator;
pub mod integer_comparator;
pub mod sequence_comparator;
pub mod yesno_comparator;
