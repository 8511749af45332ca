// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for chart rendering.

use std::path::PathBuf;

/// Errors raised while rendering the daily gas-spend chart.
///
/// Chart rendering is a side artifact of a report. A failed render degrades
/// the report's chart reference to empty with a warning; it never fails the
/// report itself.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// Writing the output file failed.
    #[error("failed to write chart file: {0}")]
    Io(#[from] std::io::Error),

    /// The output target's extension names a format this renderer
    /// does not produce.
    #[error("unsupported chart format for output target {path:?}")]
    UnsupportedFormat {
        /// The rejected output target
        path: PathBuf,
    },

    /// There were no data points to plot.
    #[error("daily series is empty, nothing to plot")]
    EmptySeries,
}

impl ChartError {
    /// Create an `UnsupportedFormat` error for an output target.
    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        ChartError::UnsupportedFormat { path: path.into() }
    }
}
