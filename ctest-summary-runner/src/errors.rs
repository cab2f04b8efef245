// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by ctest-summary.

use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use thiserror::Error;

/// An error that occurred while reading a log file.
///
/// Reading is all-or-nothing: if any part of the log can't be read, no summary is produced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LogReadError {
    /// The log file could not be opened.
    #[error("failed to open log file `{path}`")]
    Open {
        /// The path that was being opened.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        error: io::Error,
    },

    /// A line of the log file could not be read.
    ///
    /// This includes content that isn't valid UTF-8.
    #[error("failed to read line {line_number} of log file `{path}`")]
    Read {
        /// The path that was being read.
        path: Utf8PathBuf,

        /// The 1-based number of the line that failed.
        line_number: usize,

        /// The underlying error.
        #[source]
        error: io::Error,
    },
}

impl LogReadError {
    pub(crate) fn open(path: impl Into<Utf8PathBuf>, error: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            error,
        }
    }

    pub(crate) fn read(path: impl Into<Utf8PathBuf>, line_number: usize, error: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            line_number,
            error,
        }
    }

    /// Returns the path of the log file this error is for.
    pub fn path(&self) -> &Utf8Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// An error that occurred while writing the report.
#[derive(Debug, Error)]
#[error("error writing report")]
pub struct WriteReportError {
    #[source]
    error: io::Error,
}

impl WriteReportError {
    /// Creates a new `WriteReportError` from the underlying I/O error.
    pub fn new(error: io::Error) -> Self {
        Self { error }
    }
}

impl From<io::Error> for WriteReportError {
    fn from(error: io::Error) -> Self {
        Self::new(error)
    }
}
