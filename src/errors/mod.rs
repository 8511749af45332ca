// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the gastally library.
//!
//! This module provides strongly-typed errors for all public APIs. It
//! follows a hybrid approach:
//!
//! - **Domain-specific errors** for fine-grained handling ([`FetchError`],
//!   [`ValidationError`], [`ConversionError`], [`ChartError`])
//! - **Unified error type** ([`GastallyError`]) for convenience when the
//!   source does not matter
//!
//! None of these errors is fatal to a report. The report builder's contract
//! is that [`build_report`](crate::ReportBuilder::build_report) always
//! returns a [`Report`](crate::Report); failures surface to the end user
//! only as human-readable warning strings attached to it.
//!
//! # Taxonomy
//!
//! - [`FetchError`] - an external data source was unreachable or returned
//!   an error status; the corresponding field degrades to "unavailable"
//! - [`ValidationError`] - one malformed record; the record is skipped with
//!   a warning
//! - [`ConversionError`] - non-numeric input to a unit conversion; handled
//!   inside the normalizer
//! - [`ChartError`] - the chart artifact could not be produced; the report's
//!   chart reference stays empty

mod chart;
mod conversion;
mod fetch;
mod validation;

pub use chart::ChartError;
pub use conversion::ConversionError;
pub use fetch::FetchError;
pub use validation::ValidationError;

/// Unified error type for all gastally operations.
///
/// Wraps the domain-specific error types; each converts automatically via
/// `From`, so `?` propagates naturally in code that does not need to
/// distinguish sources (the bootstrap wiring, mainly).
#[derive(Debug, thiserror::Error)]
pub enum GastallyError {
    /// Error from an external data-source fetch.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from per-record validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from unit conversion.
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),

    /// Error from chart rendering.
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
}
