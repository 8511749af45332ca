// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for gastally operations.
//!
//! Telemetry is kept orthogonal to business logic: instead of `#[instrument]`
//! attributes on functions, each instrumented operation has a corresponding
//! span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

/// Create span for building a full wallet report.
///
/// Parent: None (root span for this operation)
/// Children: fetch spans, normalize_records, render_chart
#[inline]
pub(crate) fn build_report(wallet_address: &str) -> Span {
    tracing::span!(
        Level::INFO,
        "gastally.build_report",
        wallet_address = %wallet_address,
    )
}

/// Create span for one external collaborator fetch.
///
/// Parent: build_report span
/// Children: HTTP/RPC client activity
#[inline]
pub(crate) fn fetch(source_name: &'static str) -> Span {
    tracing::debug_span!("gastally.fetch", source = source_name)
}

/// Create span for normalizing a batch of raw records.
///
/// Parent: build_report span
#[inline]
pub(crate) fn normalize_records(count: usize) -> Span {
    tracing::debug_span!("gastally.normalize_records", count = count)
}

/// Create span for rendering the daily chart.
///
/// Parent: build_report span
#[inline]
pub(crate) fn render_chart(points: usize) -> Span {
    tracing::debug_span!("gastally.render_chart", points = points)
}
