// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Core functionality for `ctest-summary`.
//!
//! The basic flow is:
//!
//! 1. [`input::LogFile`] opens a captured CTest log.
//! 2. Every line is passed through [`classify`], which reports each recognized line shape as a
//!    [`classify::LineEvent`].
//! 3. The events are accumulated into a [`scan::LogScan`] in a single forward pass.
//! 4. The scan is reconciled into an immutable [`summary::LogSummary`].
//! 5. [`reporter::ReportWriter`] renders the summary as a plain-text report.

pub mod classify;
pub mod errors;
pub mod exit_codes;
pub mod input;
pub mod reporter;
pub mod scan;
pub mod summary;
