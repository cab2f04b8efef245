// Copyright (c) The ctest-summary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Display helpers for durations.

use std::fmt;

/// A duration in seconds, as shown in the total time line.
pub(super) struct DisplayTotalSecs(pub(super) f64);

impl fmt::Display for DisplayTotalSecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} sec", self.0)
    }
}

/// A duration in seconds, padded so that durations line up in the timing section.
pub(super) struct DisplayAlignedSecs(pub(super) f64);

impl fmt::Display for DisplayAlignedSecs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // * > means right-align.
        // * 7 is the number of characters to pad to.
        // * .2 means print two digits after the decimal point.
        write!(f, "{:>7.2} sec", self.0)
    }
}
