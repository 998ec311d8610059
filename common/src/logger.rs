use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{CheckerConfig, DEFAULT_LOG_LEVEL};

/// Installs the global `tracing` subscriber for a checker process.
///
/// Stdout is never written. With `log_file` set, events go only to a
/// non-blocking file writer and stderr keeps just the verdict line. Without it,
/// events go to stderr, which is silent under the default `off` filter.
/// The returned guard must be held until the process exits so buffered file
/// output is flushed.
///
/// Calling this twice is harmless: the second registration is ignored.
pub fn init_logging(log_level: &str, log_file: Option<&str>) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let (file_layer, guard) = match log_file.and_then(file_writer) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = file_layer.is_none().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true)
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    guard
}

/// Convenience wrapper reading level and file from [`CheckerConfig`].
pub fn init_from_config(config: &CheckerConfig) -> Option<WorkerGuard> {
    init_logging(&config.log_level, config.log_file.as_deref())
}

fn file_writer(
    path: &str,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let path = Path::new(path);
    let file_name = path.file_name()?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_writer_creates_missing_directories() {
        let td = TempDir::new().unwrap();
        let target = td.path().join("nested").join("checker.log");
        let writer = file_writer(target.to_str().unwrap());
        assert!(writer.is_some());
        assert!(td.path().join("nested").is_dir());
    }

    #[test]
    fn file_writer_rejects_paths_without_file_name() {
        assert!(file_writer("/").is_none());
    }

    #[test]
    fn init_logging_tolerates_bad_filter_and_repeat_calls() {
        let _first = init_logging("not a [valid filter", None);
        let _second = init_logging(DEFAULT_LOG_LEVEL, None);
    }
}
