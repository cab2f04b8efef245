// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-test records and the reconciled summary of a log.
//!
//! A [`LogSummary`] is produced once from a completed [`LogScan`] and is immutable afterwards.
//! Reconciliation compares names gathered from different line shapes:
//!
//! * a test that was announced as started but never received a terminal status is *incomplete*;
//! * a test that appeared on a completion line but never received a terminal status has an
//!   *unknown* result, and is backed by a synthesized [`TestStatus::Unknown`] record.

use crate::scan::LogScan;
use indexmap::IndexSet;
use std::{cmp::Ordering, collections::BTreeSet, fmt};
use tracing::debug;

/// The outcome of a single test, as recorded in the log.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TestStatus {
    /// The test passed.
    Passed,

    /// The test failed.
    Failed,

    /// The test was not run because it was disabled or skipped.
    ///
    /// Skipped tests carry no timing and are recorded with a zero duration.
    Disabled,

    /// The test was seen on a completion line, but its status could not be determined.
    ///
    /// Records with this status are never read from the log; they're synthesized during
    /// reconciliation.
    Unknown,
}

impl TestStatus {
    /// Returns the name of this status as shown in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
            Self::Disabled => "Disabled",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true if this status concludes a test's lifecycle, i.e. it was observed in the log
    /// rather than synthesized.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single test outcome.
///
/// Duplicate report lines for the same test (for example, retries) each produce their own record.
#[derive(Clone, Debug, PartialEq)]
pub struct TestRecord {
    /// The name of the test, in `<suite>:<case>` form.
    pub name: String,

    /// The elapsed time reported for the test, in seconds. Always non-negative.
    pub duration_secs: f64,

    /// The status of the test.
    pub status: TestStatus,
}

impl TestRecord {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, duration_secs: f64, status: TestStatus) -> Self {
        Self {
            name: name.into(),
            duration_secs,
            status,
        }
    }
}

/// The reconciled outcome of scanning a log.
#[derive(Clone, Debug)]
pub struct LogSummary {
    records: Vec<TestRecord>,
    started: Vec<String>,
    finished: IndexSet<String>,
    failed: BTreeSet<String>,
    disabled: BTreeSet<String>,
    incomplete: Vec<String>,
    unknown: BTreeSet<String>,
}

impl LogSummary {
    /// Reconciles a completed scan into a summary.
    pub fn reconcile(scan: LogScan) -> Self {
        let LogScan {
            mut records,
            started,
            finished,
            failed,
            disabled,
            ..
        } = scan;

        let known: BTreeSet<&str> = records
            .iter()
            .filter(|record| record.status.is_terminal())
            .map(|record| record.name.as_str())
            .collect();

        let incomplete: Vec<String> = started
            .iter()
            .filter(|name| !known.contains(name.as_str()))
            .cloned()
            .collect();

        let unknown: BTreeSet<String> = finished
            .iter()
            .filter(|name| !known.contains(name.as_str()))
            .cloned()
            .collect();

        // Unknown records are appended in the order their names first finished.
        let synthesized: Vec<TestRecord> = finished
            .iter()
            .filter(|name| unknown.contains(name.as_str()))
            .map(|name| TestRecord::new(name.clone(), 0.0, TestStatus::Unknown))
            .collect();
        records.extend(synthesized);

        debug!(
            records = records.len(),
            incomplete = incomplete.len(),
            unknown = unknown.len(),
            "reconciled log scan",
        );

        Self {
            records,
            started,
            finished,
            failed,
            disabled,
            incomplete,
            unknown,
        }
    }

    /// Returns all records, in the order they were created.
    ///
    /// Records synthesized for unknown results come after every record read from the log.
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    /// Returns the total number of records, including duplicates and synthesized records.
    pub fn total_tests(&self) -> usize {
        self.records.len()
    }

    /// Returns the sum of all record durations, in seconds.
    ///
    /// This is `+0.0` when there are no records.
    pub fn total_time_secs(&self) -> f64 {
        // f64's Sum starts from -0.0, which would render as "-0.00".
        self.records
            .iter()
            .fold(0.0, |total, record| total + record.duration_secs)
    }

    /// Returns the records ordered from slowest to fastest.
    ///
    /// The sort is stable: records with equal durations keep their creation order.
    pub fn by_duration(&self) -> Vec<&TestRecord> {
        let mut sorted: Vec<_> = self.records.iter().collect();
        sorted.sort_by(|a, b| descending_duration(a, b));
        sorted
    }

    /// Returns the names on every start announcement, in log order.
    ///
    /// A test that was started more than once appears once per announcement.
    pub fn started(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.started.iter().map(String::as_str)
    }

    /// Returns the names of tests that appeared on a completion line, in first-seen order.
    pub fn finished(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.finished.iter().map(String::as_str)
    }

    /// Returns the names of failed tests, in lexical order.
    ///
    /// A test named only by the run's trailing failure summary is included here, even though no
    /// record exists for it.
    pub fn failed(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.failed.iter().map(String::as_str)
    }

    /// Returns the names of disabled or skipped tests, in lexical order.
    pub fn disabled(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.disabled.iter().map(String::as_str)
    }

    /// Returns the names of tests that started but never received a terminal status, in the order
    /// they were started.
    ///
    /// A test that was started more than once is listed once per start announcement.
    pub fn incomplete(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.incomplete.iter().map(String::as_str)
    }

    /// Returns the names of tests whose result is unknown, in lexical order.
    pub fn unknown(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.unknown.iter().map(String::as_str)
    }
}

fn descending_duration(a: &TestRecord, b: &TestRecord) -> Ordering {
    b.duration_secs.total_cmp(&a.duration_secs)
}
