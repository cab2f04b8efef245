// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classification of individual log lines.
//!
//! CTest output interleaves per-test result lines with a trailing summary that refers to the same
//! tests in a different textual form. Rather than tracking a single state machine, every line is
//! checked against each [`LineShape`] independently, and every shape that matches produces a
//! [`LineEvent`]. Lines that match no shape produce nothing.
//!
//! Test names on result lines are expected in `<suite>:<case>` form, optionally followed by a
//! decoration such as a parameter suffix.

use crate::summary::TestStatus;
use regex::{Captures, Regex};
use std::{fmt, sync::LazyLock};
use tracing::warn;

/// A recognized shape of log line.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum LineShape {
    /// `Start <N>: <name>`: a test is about to run.
    Start,

    /// `Test #<N>: <name> ... Passed <secs> sec`.
    Passed,

    /// `Test #<N>: <name> ... ***Failed <secs> sec`.
    Failed,

    /// `Test #<N>: <name> ... ***Not Run (Disabled) <secs> sec`.
    Disabled,

    /// `Test #<N>: <name> ... ***Skipped`, with no duration.
    Skipped,

    /// `<N> - <name> (Failed)`, from the summary printed at the end of a run.
    SummaryFailed,
}

impl LineShape {
    /// All line shapes, in the order they're checked.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::Passed,
        Self::Failed,
        Self::Disabled,
        Self::Skipped,
        Self::SummaryFailed,
    ];

    /// Returns a short, human-readable name for this shape.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Disabled => "disabled",
            Self::Skipped => "skipped",
            Self::SummaryFailed => "summary-failed",
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            Self::Start => r"Start\s+\d+:\s+([^\r\n]+)",
            Self::Passed => r"Test\s+#\d+:\s+([^\s]+:[^\s]+[^\s]*)\s+.*?Passed\s+([0-9.]+)\s+sec",
            Self::Failed => {
                r"Test\s+#\d+:\s+([^\s]+:[^\s]+[^\s]*)\s+.*?\*\*\*Failed\s+([0-9.]+)\s+sec"
            }
            Self::Disabled => {
                r"Test\s+#\d+:\s+([^\s]+:[^\s]+[^\s]*)\s+.*?\*\*\*Not Run \(Disabled\)\s+([0-9.]+)\s+sec"
            }
            Self::Skipped => r"Test\s+#\d+:\s+([^\s]+:[^\s]+[^\s]*)\s+.*?\*\*\*Skipped",
            Self::SummaryFailed => r"\d+\s+-\s+([^\s]+:[^\s]+[^\s]*)\s+\(Failed\)",
        }
    }
}

impl fmt::Display for LineShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured data extracted from a line that matched a [`LineShape`].
#[derive(Clone, Debug, PartialEq)]
pub enum LineEvent<'a> {
    /// A test was announced as starting.
    Started {
        /// The test name.
        name: &'a str,
    },

    /// A per-test result line with a terminal status.
    Completed {
        /// The shape that matched. Skipped tests are reported as [`TestStatus::Disabled`], and
        /// this is the only way to tell them apart from explicitly disabled tests.
        shape: LineShape,

        /// The test name.
        name: &'a str,

        /// The status of the test.
        status: TestStatus,

        /// The elapsed time, in seconds. Zero for skipped tests.
        duration_secs: f64,
    },

    /// A per-test result line whose duration couldn't be parsed, so no status can be assigned.
    Indeterminate {
        /// The shape that matched.
        shape: LineShape,

        /// The test name.
        name: &'a str,

        /// The duration text as it appeared in the log.
        raw_duration: &'a str,
    },

    /// The run summary listed a test as failed.
    SummaryFailed {
        /// The test name.
        name: &'a str,
    },
}

impl LineEvent<'_> {
    /// Returns the shape that produced this event.
    pub fn shape(&self) -> LineShape {
        match self {
            Self::Started { .. } => LineShape::Start,
            Self::Completed { shape, .. } | Self::Indeterminate { shape, .. } => *shape,
            Self::SummaryFailed { .. } => LineShape::SummaryFailed,
        }
    }

    /// Returns the test name this event refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::Started { name }
            | Self::Completed { name, .. }
            | Self::Indeterminate { name, .. }
            | Self::SummaryFailed { name } => name,
        }
    }
}

struct ShapeMatcher {
    shape: LineShape,
    regex: Regex,
}

impl ShapeMatcher {
    fn new(shape: LineShape) -> Self {
        let regex = Regex::new(shape.pattern())
            .unwrap_or_else(|err| panic!("pattern for {shape} line shape is invalid: {err}"));
        Self { shape, regex }
    }

    fn extract<'a>(&self, line: &'a str) -> Option<LineEvent<'a>> {
        let captures = self.regex.captures(line)?;
        let name = capture(&captures, 1).trim();

        let event = match self.shape {
            LineShape::Start => LineEvent::Started { name },
            LineShape::SummaryFailed => LineEvent::SummaryFailed { name },
            LineShape::Skipped => LineEvent::Completed {
                shape: self.shape,
                name,
                status: TestStatus::Disabled,
                duration_secs: 0.0,
            },
            LineShape::Passed => self.timed(name, TestStatus::Passed, &captures),
            LineShape::Failed => self.timed(name, TestStatus::Failed, &captures),
            LineShape::Disabled => self.timed(name, TestStatus::Disabled, &captures),
        };
        Some(event)
    }

    fn timed<'a>(
        &self,
        name: &'a str,
        status: TestStatus,
        captures: &Captures<'a>,
    ) -> LineEvent<'a> {
        let raw_duration = capture(captures, 2);
        match raw_duration.parse::<f64>() {
            Ok(duration_secs) => LineEvent::Completed {
                shape: self.shape,
                name,
                status,
                duration_secs,
            },
            Err(err) => {
                warn!(
                    "test `{name}` has unparseable duration `{raw_duration}` on {} line: {err}",
                    self.shape,
                );
                LineEvent::Indeterminate {
                    shape: self.shape,
                    name,
                    raw_duration,
                }
            }
        }
    }
}

fn capture<'a>(captures: &Captures<'a>, group: usize) -> &'a str {
    captures.get(group).map_or("", |m| m.as_str())
}

static MATCHERS: LazyLock<Vec<ShapeMatcher>> =
    LazyLock::new(|| LineShape::ALL.into_iter().map(ShapeMatcher::new).collect());

/// Classifies a single line, returning an event for every shape that matches it.
///
/// Shapes are not mutually exclusive: a line can match more than one, in which case all matches
/// are returned in [`LineShape::ALL`] order.
pub fn classify_line(line: &str) -> impl Iterator<Item = LineEvent<'_>> {
    MATCHERS.iter().filter_map(move |matcher| matcher.extract(line))
}
