// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error type for unit conversions.

/// Errors raised when a string fails to parse as a numeric unit value.
///
/// These are recoverable at the call site. Conversion happens inside the
/// normalizer and the explorer client; a `ConversionError` never propagates
/// past them.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The input was not a valid non-negative decimal integer.
    #[error("not a valid non-negative integer amount: {value:?}")]
    InvalidBaseAmount {
        /// The rejected input
        value: String,
    },

    /// The input was not a valid decimal price.
    #[error("not a valid decimal price: {value:?}")]
    InvalidPrice {
        /// The rejected input
        value: String,
    },

    /// The input was not a valid non-negative gwei-denominated decimal.
    #[error("not a valid non-negative gwei amount: {value:?}")]
    InvalidGweiAmount {
        /// The rejected input
        value: String,
    },
}

impl ConversionError {
    /// Create an `InvalidBaseAmount` error.
    pub fn invalid_base_amount(value: impl Into<String>) -> Self {
        ConversionError::InvalidBaseAmount {
            value: value.into(),
        }
    }

    /// Create an `InvalidPrice` error.
    pub fn invalid_price(value: impl Into<String>) -> Self {
        ConversionError::InvalidPrice {
            value: value.into(),
        }
    }

    /// Create an `InvalidGweiAmount` error.
    pub fn invalid_gwei_amount(value: impl Into<String>) -> Self {
        ConversionError::InvalidGweiAmount {
            value: value.into(),
        }
    }
}
