// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for external data-source fetches.

use std::time::Duration;

/// Errors raised by the external collaborators that feed the report builder:
/// the explorer transaction-history API, the RPC gas-price endpoint, and the
/// fiat-quote endpoint.
///
/// Every variant is recoverable. The report builder never propagates a
/// `FetchError`; it degrades the corresponding report field to "unavailable"
/// and records a warning.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP transport failure (connection refused, DNS, TLS, bad status).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The explorer API answered but reported an error status in its
    /// envelope (invalid API key, rate limited, malformed query).
    #[error("explorer API error: {message}")]
    Api {
        /// Error message from the API envelope
        message: String,
    },

    /// The response parsed as JSON but did not match the expected shape.
    #[error("unexpected payload from {source_name}: {details}")]
    UnexpectedPayload {
        /// Which data source produced the payload
        source_name: &'static str,
        /// What was wrong with it
        details: String,
    },

    /// RPC provider failure when fetching the network gas price.
    #[error("RPC request failed: {details}")]
    Rpc {
        /// Details from the underlying provider error
        details: String,
    },

    /// The fetch did not complete within the caller-imposed deadline.
    #[error("fetch timed out after {timeout:?}")]
    Timeout {
        /// The deadline that was exceeded
        timeout: Duration,
    },
}

impl FetchError {
    /// Create an `Api` error from an explorer envelope message.
    pub fn api(message: impl Into<String>) -> Self {
        FetchError::Api {
            message: message.into(),
        }
    }

    /// Create an `UnexpectedPayload` error for a named source.
    pub fn unexpected_payload(source_name: &'static str, details: impl Into<String>) -> Self {
        FetchError::UnexpectedPayload {
            source_name,
            details: details.into(),
        }
    }

    /// Create an `Rpc` error with details.
    pub fn rpc(details: impl Into<String>) -> Self {
        FetchError::Rpc {
            details: details.into(),
        }
    }

    /// Create a `Timeout` error for the given deadline.
    pub fn timeout(timeout: Duration) -> Self {
        FetchError::Timeout { timeout }
    }
}
