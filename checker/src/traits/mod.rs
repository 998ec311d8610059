//!
//! Traits Module
//!
//! Core traits that keep comparator logic independent of files and process exit.
//!
//! - [`checker`]: the comparator strategy trait.
//! - [`token_reader`]: the typed token source every comparator reads from.

pub mod checker;
pub mod token_reader;
