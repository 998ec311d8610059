//! Ambient plumbing shared by the checker binaries: environment-backed
//! configuration and `tracing` subscriber setup.

pub mod config;
pub mod logger;
