// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::output::{NO_HEADING_TARGET, StderrStyles};
use ctest_summary_runner::{
    errors::{LogReadError, WriteReportError},
    exit_codes::SummaryExitCode,
};
use owo_colors::OwoColorize;
use std::error::Error;
use thiserror::Error;
use tracing::error;

pub(crate) type Result<T, E = ExpectedError> = std::result::Result<T, E>;

// Note that the #[error()] strings are mostly placeholder messages -- the expected way to print out
// errors is with the display_to_stderr method, which colorizes errors.

/// An expected failure, mapped to a documented exit code.
#[derive(Debug, Error)]
#[doc(hidden)]
pub enum ExpectedError {
    #[error("failed to read log file")]
    LogReadError {
        #[from]
        err: LogReadError,
    },
    #[error("failed to write report")]
    WriteReportError {
        #[from]
        err: WriteReportError,
    },
}

impl ExpectedError {
    /// Returns the exit code for the process.
    pub fn process_exit_code(&self) -> i32 {
        match self {
            Self::LogReadError { .. } => SummaryExitCode::LOG_READ_FAILED,
            Self::WriteReportError { .. } => SummaryExitCode::WRITE_OUTPUT_ERROR,
        }
    }

    /// Displays this error to stderr.
    pub fn display_to_stderr(&self, styles: &StderrStyles) {
        let mut next_error = match self {
            Self::LogReadError { err } => {
                let action = match err {
                    LogReadError::Open { .. } => "open".to_owned(),
                    LogReadError::Read { line_number, .. } => {
                        format!("read line {line_number} of")
                    }
                    _ => "read".to_owned(),
                };
                error!(
                    "failed to {action} log file `{}`",
                    err.path().style(styles.bold)
                );
                err.source()
            }
            Self::WriteReportError { err } => {
                error!("failed to write report to stdout");
                err.source()
            }
        };

        while let Some(err) = next_error {
            error!(target: NO_HEADING_TARGET, "\nCaused by:\n  {}", err);
            next_error = err.source();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino_tempfile::Utf8TempDir;
    use ctest_summary_runner::input::LogFile;
    use std::io;

    #[test]
    fn exit_codes() {
        let dir = Utf8TempDir::new().unwrap();
        let err: ExpectedError = LogFile::open(dir.path().join("missing.log"))
            .unwrap_err()
            .into();
        assert_eq!(err.process_exit_code(), SummaryExitCode::LOG_READ_FAILED);

        let err: ExpectedError =
            WriteReportError::new(io::Error::from(io::ErrorKind::BrokenPipe)).into();
        assert_eq!(err.process_exit_code(), SummaryExitCode::WRITE_OUTPUT_ERROR);
    }
}
