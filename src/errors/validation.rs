// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for per-record transaction validation.

/// Errors raised when one raw explorer record fails normalization.
///
/// A `ValidationError` covers exactly one record. The caller skips the
/// record, appends a warning identifying it, and keeps processing; a
/// malformed record from an upstream API must never abort a report.
///
/// The `record` field carries the transaction hash when one was present, or
/// a positional label like `record #3` when the hash itself was unusable.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent from the raw record.
    #[error("{record}: missing required field `{field}`")]
    MissingField {
        /// Name of the absent field (explorer wire name)
        field: &'static str,
        /// Identifier of the offending record
        record: String,
    },

    /// A field that must hold a decimal integer did not parse as one.
    #[error("{record}: field `{field}` is not a valid non-negative integer: {value:?}")]
    NonNumericField {
        /// Name of the offending field (explorer wire name)
        field: &'static str,
        /// The raw value that failed to parse
        value: String,
        /// Identifier of the offending record
        record: String,
    },

    /// The Unix-seconds timestamp string did not parse or was out of range.
    #[error("{record}: invalid timestamp: {value:?}")]
    InvalidTimestamp {
        /// The raw timestamp value
        value: String,
        /// Identifier of the offending record
        record: String,
    },

    /// A wallet address failed the syntactic check (0x prefix, 42 chars).
    #[error("invalid wallet address: {value:?}")]
    InvalidAddress {
        /// The rejected input
        value: String,
    },
}

impl ValidationError {
    /// Create a `MissingField` error for a record.
    pub fn missing_field(field: &'static str, record: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field,
            record: record.into(),
        }
    }

    /// Create a `NonNumericField` error for a record.
    pub fn non_numeric_field(
        field: &'static str,
        value: impl Into<String>,
        record: impl Into<String>,
    ) -> Self {
        ValidationError::NonNumericField {
            field,
            value: value.into(),
            record: record.into(),
        }
    }

    /// Create an `InvalidTimestamp` error for a record.
    pub fn invalid_timestamp(value: impl Into<String>, record: impl Into<String>) -> Self {
        ValidationError::InvalidTimestamp {
            value: value.into(),
            record: record.into(),
        }
    }

    /// Create an `InvalidAddress` error.
    pub fn invalid_address(value: impl Into<String>) -> Self {
        ValidationError::InvalidAddress {
            value: value.into(),
        }
    }
}
