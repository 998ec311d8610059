//! Command-line entry points shared by every checker binary.
//!
//! Arguments follow the judging harness: `<input> <output> <answer> [<report>]`.
//! The verdict line goes to stderr as `<label> <message>` and the process exits
//! with the verdict's status. Argument and file errors are checker failures,
//! never a clap exit code, so the harness can always tell who is at fault.

use crate::report::CheckReport;
use crate::types::Outcome;
use crate::{CheckJob, CheckMethod};
use clap::{Args, Parser};
use common::config::CheckerConfig;
use common::logger::init_from_config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn};

/// File arguments in harness order.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckPaths {
    /// Test input file
    pub input: PathBuf,
    /// Contestant output file
    pub output: PathBuf,
    /// Reference answer file
    pub answer: PathBuf,
    /// Optional path for the JSON result report
    pub report: Option<PathBuf>,
}

/// Arguments for a single-method binary.
#[derive(Parser, Debug)]
#[command(version, about = "Judge contestant output against a reference answer")]
pub struct MethodArgs {
    #[command(flatten)]
    pub paths: CheckPaths,
}

/// Arguments for the dispatcher binary.
#[derive(Parser, Debug)]
#[command(version, about = "Judge contestant output with a selectable check method")]
pub struct DispatchArgs {
    /// Check method to apply
    #[arg(long, value_enum, ignore_case = true)]
    pub method: CheckMethod,
    #[command(flatten)]
    pub paths: CheckPaths,
}

/// Entry point for a binary bound to one method.
pub fn run(method: CheckMethod) -> ExitCode {
    let config = CheckerConfig::global();
    let _log_guard = init_from_config(&config);

    match MethodArgs::try_parse() {
        Ok(args) => execute(method, &args.paths, &config),
        Err(e) => usage_error(e),
    }
}

/// Entry point for the `check` dispatcher.
pub fn run_dispatch() -> ExitCode {
    let config = CheckerConfig::global();
    let _log_guard = init_from_config(&config);

    match DispatchArgs::try_parse() {
        Ok(args) => execute(args.method, &args.paths, &config),
        Err(e) => usage_error(e),
    }
}

fn usage_error(e: clap::Error) -> ExitCode {
    if !e.use_stderr() {
        // --help and --version
        if let Err(io) = e.print() {
            error!("Failed to print help: {}", io);
        }
        return ExitCode::SUCCESS;
    }
    warn!("invalid arguments: {}", e);
    eprintln!("{}", usage_outcome(&e));
    ExitCode::from(crate::Verdict::CheckerFailure.exit_code())
}

fn usage_outcome(e: &clap::Error) -> Outcome {
    let text = e.to_string();
    let summary = text
        .lines()
        .next()
        .map(|line| line.trim_start_matches("error: ").to_string())
        .unwrap_or_else(|| "invalid arguments".to_string());
    Outcome::checker_failure(summary)
}

fn execute(method: CheckMethod, paths: &CheckPaths, config: &CheckerConfig) -> ExitCode {
    let report = check(method, paths, config.max_input_bytes);
    eprintln!("{}", report.outcome());

    if let Some(path) = &paths.report {
        if let Err(e) = report.write_to(path) {
            eprintln!("{}", Outcome::checker_failure(e.to_string()));
            return ExitCode::from(crate::Verdict::CheckerFailure.exit_code());
        }
    }

    ExitCode::from(report.exit_code)
}

/// Runs one check and always produces a report.
///
/// Operational errors are folded into a `CHECKER_FAILURE` report.
pub fn check(method: CheckMethod, paths: &CheckPaths, max_input_bytes: u64) -> CheckReport {
    let job = CheckJob::new(
        paths.input.clone(),
        paths.output.clone(),
        paths.answer.clone(),
    )
    .with_method(method)
    .with_max_input_bytes(max_input_bytes);
    let description = job.description();

    job.run().unwrap_or_else(|e| {
        error!(method = %method, "check aborted: {}", e);
        CheckReport::failure(description, &e)
    })
}

/// Convenience for callers holding plain paths.
pub fn check_files(
    method: CheckMethod,
    input: &Path,
    output: &Path,
    answer: &Path,
    max_input_bytes: u64,
) -> CheckReport {
    let paths = CheckPaths {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        answer: answer.to_path_buf(),
        report: None,
    };
    check(method, &paths, max_input_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_args_parse_positionals() {
        let args =
            MethodArgs::try_parse_from(["long", "1.in", "1.out", "1.ans"]).unwrap();
        assert_eq!(args.paths.input, PathBuf::from("1.in"));
        assert_eq!(args.paths.output, PathBuf::from("1.out"));
        assert_eq!(args.paths.answer, PathBuf::from("1.ans"));
        assert_eq!(args.paths.report, None);
    }

    #[test]
    fn optional_report_path_is_accepted() {
        let args =
            MethodArgs::try_parse_from(["long", "1.in", "1.out", "1.ans", "r.json"]).unwrap();
        assert_eq!(args.paths.report, Some(PathBuf::from("r.json")));
    }

    #[test]
    fn missing_positionals_are_rejected() {
        assert!(MethodArgs::try_parse_from(["long", "1.in", "1.out"]).is_err());
    }

    #[test]
    fn dispatcher_requires_known_method() {
        let args = DispatchArgs::try_parse_from([
            "check", "--method", "NHUGE", "1.in", "1.out", "1.ans",
        ])
        .unwrap();
        assert_eq!(args.method, CheckMethod::Nhuge);

        assert!(
            DispatchArgs::try_parse_from(["check", "--method", "file", "a", "b", "c"]).is_err()
        );
        assert!(DispatchArgs::try_parse_from(["check", "a", "b", "c"]).is_err());
    }

    #[test]
    fn usage_errors_become_checker_failures() {
        let err = MethodArgs::try_parse_from(["long"]).unwrap_err();
        let outcome = usage_outcome(&err);
        assert_eq!(outcome.verdict, crate::Verdict::CheckerFailure);
        assert!(!outcome.message.is_empty());
        assert!(!outcome.message.starts_with("error: "));
    }
}
