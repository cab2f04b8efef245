// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering summaries as human-readable reports.
//!
//! The report always has the same six sections in the same order. An empty section is rendered
//! with a `None` placeholder rather than omitted, so the structure of the report doesn't depend on
//! the log.

mod displayer;
mod duration;

pub use displayer::ReportWriter;
