//! Global checker configuration.
//!
//! `CheckerConfig` is a lazily initialized, process-wide singleton loaded from
//! environment variables, plus a `.env` file that sits next to the checker
//! executable. A `.env` in the judge's working directory is never read.
//! Binaries read it once at startup; tests can override individual fields or
//! reload it with [`CheckerConfig::reset`].

use std::env;
use std::path::PathBuf;
use std::sync::{OnceLock, PoisonError, RwLock};

/// Largest input file a checker will load unless `CHECKER_MAX_INPUT_BYTES` says otherwise.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 256 * 1024 * 1024; // 256MB

/// Default `EnvFilter` directive. Logging is opt-in: stderr carries the verdict.
pub const DEFAULT_LOG_LEVEL: &str = "off";

/// Runtime configuration for a checker process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// `EnvFilter` directive, e.g. `checker=debug`.
    pub log_level: String,
    /// Optional log file. When set, events go only to this file.
    pub log_file: Option<String>,
    /// Upper bound on the size of the answer and output files.
    pub max_input_bytes: u64,
}

static CONFIG_INSTANCE: OnceLock<RwLock<CheckerConfig>> = OnceLock::new();

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_file: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl CheckerConfig {
    /// Loads the configuration from the executable's `.env` and environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults; a checker must
    /// still produce a verdict when its environment is sparse.
    pub fn from_env() -> Self {
        if let Some(path) = dotenv_path() {
            dotenvy::from_path(path).ok();
        }

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into()),
            log_file: env::var("LOG_FILE").ok().filter(|f| !f.trim().is_empty()),
            max_input_bytes: env::var("CHECKER_MAX_INPUT_BYTES")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_INPUT_BYTES),
        }
    }

    fn instance() -> &'static RwLock<CheckerConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(CheckerConfig::from_env()))
    }

    /// Returns a snapshot of the global configuration.
    pub fn global() -> CheckerConfig {
        Self::instance()
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reloads the global configuration from the environment.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = CheckerConfig::from_env();
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut CheckerConfig),
    {
        let mut guard = Self::instance()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        setter(&mut guard);
    }

    pub fn set_log_level(value: impl Into<String>) {
        CheckerConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_max_input_bytes(value: u64) {
        CheckerConfig::set_field(|cfg| cfg.max_input_bytes = value);
    }
}

/// `.env` beside the running executable, if the executable path is known.
pub fn dotenv_path() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    Some(exe.parent()?.join(".env"))
}
