// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::duration::{DisplayAlignedSecs, DisplayTotalSecs};
use crate::{
    errors::WriteReportError,
    summary::{LogSummary, TestStatus},
};
use owo_colors::{OwoColorize, Style, style};
use std::io::Write;

/// Writes [`LogSummary`] instances as plain-text reports.
///
/// By default the report contains no escape codes. Call [`colorize`](Self::colorize) to style
/// headings and status tags; the text itself is the same either way.
#[derive(Debug, Default)]
pub struct ReportWriter {
    styles: Box<Styles>,
}

impl ReportWriter {
    /// Creates a new report writer with colors disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables ANSI styling in the report.
    pub fn colorize(&mut self) {
        self.styles.colorize();
    }

    /// Writes the full report for `summary` to `writer`.
    pub fn write_report(
        &self,
        summary: &LogSummary,
        mut writer: impl Write,
    ) -> Result<(), WriteReportError> {
        self.write_totals(summary, &mut writer)?;
        writeln!(writer)?;

        self.write_names("Tests that FAILED:", summary.failed(), &mut writer)?;
        writeln!(writer)?;

        // Start order, not lexical order: the first incomplete test is usually where the run
        // stopped.
        self.write_names(
            "Tests that started but did NOT complete:",
            summary.incomplete(),
            &mut writer,
        )?;
        writeln!(writer)?;

        self.write_timings(summary, &mut writer)?;
        writeln!(writer)?;

        self.write_names("Tests that were DISABLED:", summary.disabled(), &mut writer)?;
        writeln!(writer)?;

        self.write_names("Tests with UNKNOWN result:", summary.unknown(), &mut writer)?;

        Ok(())
    }

    fn write_totals(
        &self,
        summary: &LogSummary,
        writer: &mut impl Write,
    ) -> Result<(), WriteReportError> {
        writeln!(
            writer,
            "{}: {}",
            "Total tests".style(self.styles.heading),
            summary.total_tests().style(self.styles.count),
        )?;
        writeln!(
            writer,
            "{}: {}",
            "Total time".style(self.styles.heading),
            DisplayTotalSecs(summary.total_time_secs()),
        )?;
        Ok(())
    }

    fn write_names<'a>(
        &self,
        heading: &str,
        names: impl ExactSizeIterator<Item = &'a str>,
        writer: &mut impl Write,
    ) -> Result<(), WriteReportError> {
        writeln!(writer, "{}", heading.style(self.styles.heading))?;
        if names.len() == 0 {
            self.write_none(writer)?;
        }
        for name in names {
            writeln!(writer, "  {name}")?;
        }
        Ok(())
    }

    fn write_timings(
        &self,
        summary: &LogSummary,
        writer: &mut impl Write,
    ) -> Result<(), WriteReportError> {
        writeln!(
            writer,
            "{}",
            "Tests ordered from slowest to fastest:".style(self.styles.heading)
        )?;

        let records = summary.by_duration();
        if records.is_empty() {
            self.write_none(writer)?;
        }
        for record in records {
            writeln!(
                writer,
                "{}  {} [{}]",
                DisplayAlignedSecs(record.duration_secs),
                record.name,
                record.status.style(self.styles.status(record.status)),
            )?;
        }
        Ok(())
    }

    fn write_none(&self, writer: &mut impl Write) -> Result<(), WriteReportError> {
        writeln!(writer, "  {}", "None".style(self.styles.none))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Styles {
    heading: Style,
    count: Style,
    none: Style,
    pass: Style,
    fail: Style,
    disabled: Style,
    unknown: Style,
}

impl Styles {
    fn colorize(&mut self) {
        self.heading = style().bold();
        self.count = style().bold();
        self.none = style().dimmed();
        self.pass = style().green().bold();
        self.fail = style().red().bold();
        self.disabled = style().yellow().bold();
        self.unknown = style().magenta().bold();
    }

    fn status(&self, status: TestStatus) -> Style {
        match status {
            TestStatus::Passed => self.pass,
            TestStatus::Failed => self.fail,
            TestStatus::Disabled => self.disabled,
            TestStatus::Unknown => self.unknown,
        }
    }
}
