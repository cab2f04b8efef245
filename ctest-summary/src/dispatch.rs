// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    errors::Result,
    output::{OutputContext, OutputOpts, OutputWriter},
};
use camino::Utf8PathBuf;
use clap::Parser;
use ctest_summary_runner::{
    errors::WriteReportError, exit_codes::SummaryExitCode, input::LogFile,
    reporter::ReportWriter,
};
use std::io::Write;
use tracing::debug;

/// Summarize the test outcomes recorded in a captured CTest log.
///
/// Reads a log produced by running gtest-based suites under CTest and prints totals, failed,
/// incomplete, disabled and unknown tests, and per-test timings from slowest to fastest.
#[derive(Debug, Parser)]
#[command(
    version,
    styles = crate::output::clap_styles::style(),
    max_term_width = 100
)]
pub struct CtestSummaryApp {
    /// Path to the captured CTest log
    #[arg(value_name = "LOG_FILE")]
    log_file: Utf8PathBuf,

    #[clap(flatten)]
    output: OutputOpts,
}

impl CtestSummaryApp {
    /// Initializes the output context.
    pub fn init_output(&self) -> OutputContext {
        self.output.init()
    }

    /// Executes the app.
    ///
    /// Returns the process exit code on success.
    pub fn exec(self, output: OutputContext, output_writer: &mut OutputWriter) -> Result<i32> {
        let log = LogFile::open(self.log_file)?;
        let summary = log.scan()?;
        debug!(
            "summarized {} tests ({} failed, {} incomplete)",
            summary.total_tests(),
            summary.failed().len(),
            summary.incomplete().len(),
        );

        let mut reporter = ReportWriter::new();
        if output.colorize_report() {
            reporter.colorize();
        }

        let mut writer = output_writer.stdout_writer();
        reporter.write_report(&summary, &mut writer)?;
        writer.flush().map_err(WriteReportError::new)?;

        Ok(SummaryExitCode::OK)
    }
}
