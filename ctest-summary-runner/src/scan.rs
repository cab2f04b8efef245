// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The single forward pass over a log.
//!
//! [`LogScan`] owns all the state accumulated while reading a log. It's created empty, fed one
//! line at a time through [`LogScan::scan_line`], and finally consumed by
//! [`LogSummary::reconcile`].

use crate::{
    classify::{LineEvent, LineShape, classify_line},
    errors::LogReadError,
    summary::{LogSummary, TestRecord, TestStatus},
};
use camino::Utf8Path;
use indexmap::IndexSet;
use std::{collections::BTreeSet, io::BufRead};
use tracing::debug;

/// Accumulated state for a log that is being scanned.
#[derive(Debug, Default)]
pub struct LogScan {
    pub(crate) records: Vec<TestRecord>,
    pub(crate) started: Vec<String>,
    pub(crate) finished: IndexSet<String>,
    pub(crate) failed: BTreeSet<String>,
    pub(crate) disabled: BTreeSet<String>,
    lines_scanned: usize,
    shape_counts: [usize; LineShape::ALL.len()],
}

impl LogScan {
    /// Creates a new, empty scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies a single line and records everything it matched.
    pub fn scan_line(&mut self, line: &str) {
        self.lines_scanned += 1;
        for event in classify_line(line) {
            self.record_event(event);
        }
    }

    /// Records a single classified event.
    pub fn record_event(&mut self, event: LineEvent<'_>) {
        self.shape_counts[event.shape() as usize] += 1;

        match event {
            LineEvent::Started { name } => {
                self.started.push(name.to_owned());
            }
            LineEvent::Completed {
                name,
                status,
                duration_secs,
                ..
            } => {
                self.finished.insert(name.to_owned());
                match status {
                    TestStatus::Failed => {
                        self.failed.insert(name.to_owned());
                    }
                    TestStatus::Disabled => {
                        self.disabled.insert(name.to_owned());
                    }
                    TestStatus::Passed | TestStatus::Unknown => {}
                }
                self.records.push(TestRecord::new(name, duration_secs, status));
            }
            LineEvent::Indeterminate { name, .. } => {
                self.finished.insert(name.to_owned());
            }
            LineEvent::SummaryFailed { name } => {
                // The summary only marks the name as failed. It doesn't produce a record.
                self.failed.insert(name.to_owned());
            }
        }
    }

    /// Returns the number of lines scanned so far.
    pub fn lines_scanned(&self) -> usize {
        self.lines_scanned
    }

    /// Returns the number of times lines of the given shape were matched so far.
    pub fn shape_count(&self, shape: LineShape) -> usize {
        self.shape_counts[shape as usize]
    }

    /// Finishes the scan, reconciling it into a [`LogSummary`].
    pub fn finish(self) -> LogSummary {
        debug!(
            lines = self.lines_scanned,
            start = self.shape_count(LineShape::Start),
            passed = self.shape_count(LineShape::Passed),
            failed = self.shape_count(LineShape::Failed),
            disabled = self.shape_count(LineShape::Disabled),
            skipped = self.shape_count(LineShape::Skipped),
            summary_failed = self.shape_count(LineShape::SummaryFailed),
            "finished scanning log",
        );
        LogSummary::reconcile(self)
    }
}

/// Scans an in-memory sequence of lines.
///
/// Lines should not contain line terminators.
pub fn scan_lines<I>(lines: I) -> LogSummary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut scan = LogScan::new();
    for line in lines {
        scan.scan_line(line.as_ref());
    }
    scan.finish()
}

/// Scans every line from a reader.
///
/// `path` is only used for error reporting. If any line fails to be read, including lines that
/// aren't valid UTF-8, the whole scan fails and no summary is produced.
pub fn scan_reader<R: BufRead>(reader: R, path: &Utf8Path) -> Result<LogSummary, LogReadError> {
    let mut scan = LogScan::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| LogReadError::read(path, index + 1, error))?;
        scan.scan_line(&line);
    }
    Ok(scan.finish())
}
