// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests that run the `ctest-summary` binary against logs on disk.

use camino_tempfile::Utf8TempDir;
use ctest_summary_runner::exit_codes::SummaryExitCode;
use indoc::indoc;
use pretty_assertions::assert_eq;

mod cli;

use cli::{CtestSummaryCli, fixture_path};

const SAMPLE_REPORT: &str = indoc! {"
    Total tests: 7
    Total time: 4.26 sec

    Tests that FAILED:
      AampTelemetryTests:SendEvent
      AampTsbReaderTests:TestSeekBackward

    Tests that started but did NOT complete:
      AampDrmTests:LicenseRenewal
      AampTelemetryTests:SendEvent

    Tests ordered from slowest to fastest:
       2.05 sec  AampSchedulerTests:ScheduleTask [Passed]
       1.37 sec  AampTsbReaderTests:TestSeekBackward [Failed]
       0.42 sec  AampTsbReaderTests:TestReadNext [Passed]
       0.42 sec  AampProfilerTests:TuneTimes [Passed]
       0.00 sec  AampConfigTests:DISABLED_LoadFromFile [Disabled]
       0.00 sec  AampCacheHandlerTests:Eviction [Disabled]
       0.00 sec  AampDrmTests:LicenseRenewal [Unknown]

    Tests that were DISABLED:
      AampCacheHandlerTests:Eviction
      AampConfigTests:DISABLED_LoadFromFile

    Tests with UNKNOWN result:
      AampDrmTests:LicenseRenewal
"};

#[test]
fn test_sample_log() {
    let output = CtestSummaryCli::new()
        .args([fixture_path("ctest-sample.log").as_str()])
        .output();

    assert_eq!(output.exit_status.code(), Some(SummaryExitCode::OK));
    assert_eq!(output.stdout_as_str(), SAMPLE_REPORT);
}

#[test]
fn test_sample_log_color_never() {
    let output = CtestSummaryCli::new()
        .args([
            "--color",
            "never",
            fixture_path("ctest-sample.log").as_str(),
        ])
        .output();

    assert_eq!(output.stdout_as_str(), SAMPLE_REPORT);
}

#[test]
fn test_sample_log_color_always() {
    let output = CtestSummaryCli::new()
        .env("CTEST_SUMMARY_COLOR", "always")
        .args([fixture_path("ctest-sample.log").as_str()])
        .output();

    let stdout = output.stdout_as_str();
    assert!(stdout.contains('\u{1b}'), "report is colorized:\n{stdout}");
    assert_eq!(strip_ansi_escapes::strip_str(&stdout), SAMPLE_REPORT);
}

#[test]
fn test_empty_log() {
    let dir = Utf8TempDir::new().unwrap();
    let path = dir.path().join("empty.log");
    std::fs::write(&path, "").unwrap();

    let output = CtestSummaryCli::new().args([path.as_str()]).output();

    assert_eq!(
        output.stdout_as_str(),
        indoc! {"
            Total tests: 0
            Total time: 0.00 sec

            Tests that FAILED:
              None

            Tests that started but did NOT complete:
              None

            Tests ordered from slowest to fastest:
              None

            Tests that were DISABLED:
              None

            Tests with UNKNOWN result:
              None
        "}
    );
}

#[test]
fn test_missing_log() {
    let dir = Utf8TempDir::new().unwrap();
    let path = dir.path().join("missing.log");

    let output = CtestSummaryCli::new()
        .args([path.as_str()])
        .unchecked(true)
        .output();

    assert_eq!(
        output.exit_status.code(),
        Some(SummaryExitCode::LOG_READ_FAILED),
        "{output}"
    );
    assert_eq!(output.stdout_as_str(), "", "no report is written");
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains("error: failed to open log file"),
        "stderr names the failure:\n{stderr}"
    );
    assert!(stderr.contains("missing.log"), "stderr names the path:\n{stderr}");
    assert!(stderr.contains("Caused by:"), "stderr has the cause:\n{stderr}");
}

#[test]
fn test_usage_errors() {
    let dir = Utf8TempDir::new().unwrap();
    let a = dir.path().join("a.log");
    let b = dir.path().join("b.log");

    for args in [vec![], vec![a.as_str(), b.as_str()]] {
        let output = CtestSummaryCli::new().args(args).unchecked(true).output();
        assert_eq!(output.exit_status.code(), Some(2), "{output}");
        assert_eq!(output.stdout_as_str(), "", "usage goes to stderr");
        assert!(
            output.stderr_as_str().contains("Usage:"),
            "usage message is printed:\n{output}"
        );
    }
}

#[test]
fn test_verbose_logs_to_stderr() {
    let output = CtestSummaryCli::new()
        .args(["--verbose", fixture_path("ctest-sample.log").as_str()])
        .output();

    assert_eq!(output.stdout_as_str(), SAMPLE_REPORT, "stdout has only the report");
    let stderr = output.stderr_as_str();
    assert!(
        stderr.contains("debug: opened log file"),
        "debug logs are enabled:\n{stderr}"
    );
    assert!(
        stderr.contains("warning: "),
        "unparseable duration is reported:\n{stderr}"
    );
}
