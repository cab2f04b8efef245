// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opening captured logs.

use crate::{errors::LogReadError, scan::scan_reader, summary::LogSummary};
use camino::{Utf8Path, Utf8PathBuf};
use std::{fs::File, io::BufReader};
use tracing::debug;

/// A log file that has been opened for scanning.
///
/// The file handle is held until [`scan`](Self::scan) completes, and is closed whether or not
/// scanning succeeds.
#[derive(Debug)]
pub struct LogFile {
    path: Utf8PathBuf,
    reader: BufReader<File>,
}

impl LogFile {
    /// Opens the log file at `path`.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self, LogReadError> {
        let path = path.into();
        let file = File::open(&path).map_err(|error| LogReadError::open(&path, error))?;
        debug!("opened log file `{path}`");
        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    /// Returns the path this log was opened from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Reads the entire log in a single pass and reconciles it into a summary.
    pub fn scan(self) -> Result<LogSummary, LogReadError> {
        let Self { path, reader } = self;
        scan_reader(reader, &path)
    }
}
