// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Documented exit codes.

/// Documented exit codes for `ctest-summary` failures.
///
/// Failing tests recorded in a log do not affect the exit code: a report that lists failures is
/// still a successful run. Argument errors are reported by the command-line parser, which exits
/// with code 2.
///
/// Unknown/unexpected failures will always result in exit code 1.
pub enum SummaryExitCode {}

impl SummaryExitCode {
    /// The log was read and the report was written.
    pub const OK: i32 = 0;

    /// The log file could not be opened or read, or it was not valid UTF-8.
    pub const LOG_READ_FAILED: i32 = 96;

    /// Writing the report to standard output failed.
    pub const WRITE_OUTPUT_ERROR: i32 = 110;
}
