// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact unit conversion between wei and human-facing decimal units
//!
//! Every conversion here is performed with `BigDecimal` arithmetic so that
//! displayed totals are bit-for-bit reproducible. Binary floating point is
//! never used: at wei scale (values around 10^18) an `f64` mantissa cannot
//! represent every integer, and the resulting drift would show up in
//! user-facing totals.
//!
//! The decimal-places convention: wei values cross this boundary as raw
//! `U256` integers; the exponent (18 for ether, 9 for gwei) is applied here
//! and nowhere else.

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::{BigDecimal, RoundingMode};

use crate::errors::ConversionError;

/// Wei per ether exponent: 1 ETH = 10^18 wei
pub const ETH_DECIMALS: u32 = 18;

/// Wei per gwei exponent: 1 gwei = 10^9 wei
pub const GWEI_DECIMALS: u32 = 9;

/// Fractional digits shown when rendering ether amounts
pub const ETH_DISPLAY_SCALE: i64 = 6;

/// Fractional digits shown when rendering gwei amounts
pub const GWEI_DISPLAY_SCALE: i64 = 2;

/// Fractional digits for fiat values (currency cents)
pub const FIAT_SCALE: i64 = 2;

/// Convert a U256 to a BigInt without going through strings.
fn u256_to_bigint(value: U256) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, &value.to_be_bytes::<32>())
}

/// Divide a base-unit amount by `10^exponent`, exactly.
///
/// The result carries the full precision of the input; use
/// [`to_eth_string`] or [`to_gwei_string`] for fixed-scale rendering.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use gastally::units::{to_decimal_unit, ETH_DECIMALS};
///
/// let wei = U256::from(1_500_000_000_000_000_000u128);
/// assert_eq!(
///     to_decimal_unit(wei, ETH_DECIMALS),
///     BigDecimal::from_str("1.5").unwrap()
/// );
/// ```
pub fn to_decimal_unit(base: U256, exponent: u32) -> BigDecimal {
    // BigDecimal::new is an exact scale shift, not a division
    BigDecimal::new(u256_to_bigint(base), i64::from(exponent))
}

/// Render a wei amount in ether with a fixed 6-digit fractional part.
pub fn to_eth_string(base: U256) -> String {
    to_decimal_unit(base, ETH_DECIMALS)
        .with_scale_round(ETH_DISPLAY_SCALE, RoundingMode::HalfUp)
        .to_string()
}

/// Render a wei amount in gwei with a fixed 2-digit fractional part.
pub fn to_gwei_string(base: U256) -> String {
    to_decimal_unit(base, GWEI_DECIMALS)
        .with_scale_round(GWEI_DISPLAY_SCALE, RoundingMode::HalfUp)
        .to_string()
}

/// Fiat value of a base-unit amount, rounded half-up to 2 decimal places.
///
/// Returns `None` when the price quote is absent or non-positive. A missing
/// quote is a common, expected condition (price fetch failed) that degrades
/// the display, so it is a sentinel rather than an error.
pub fn to_fiat_value(
    base: U256,
    exponent: u32,
    price_per_unit: Option<&BigDecimal>,
) -> Option<BigDecimal> {
    let price = price_per_unit?;
    if *price <= BigDecimal::from(0) {
        return None;
    }
    let value = to_decimal_unit(base, exponent) * price;
    Some(value.with_scale_round(FIAT_SCALE, RoundingMode::HalfUp))
}

/// Parse a base-unit amount delivered as a decimal string.
///
/// Explorer APIs type every numeric field as a string; this is the single
/// defensive entry point for turning one into a `U256`. Only non-negative
/// decimal integers are accepted.
pub fn parse_base_units(value: &str) -> Result<U256, ConversionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConversionError::invalid_base_amount(value));
    }
    U256::from_str_radix(trimmed, 10)
        .map_err(|_| ConversionError::invalid_base_amount(value))
}

/// Parse a fiat price string (e.g. `"2000.00"`) into a `BigDecimal`.
pub fn parse_price(value: &str) -> Result<BigDecimal, ConversionError> {
    value
        .trim()
        .parse::<BigDecimal>()
        .map_err(|_| ConversionError::invalid_price(value))
}

/// Parse a gwei-denominated decimal string into wei.
///
/// Gas oracles quote fees in gwei with a fractional part (e.g. `"12.437"`);
/// sub-wei precision is rounded half-up. Negative values are rejected.
pub fn parse_gwei_units(value: &str) -> Result<U256, ConversionError> {
    let gwei = value
        .trim()
        .parse::<BigDecimal>()
        .map_err(|_| ConversionError::invalid_gwei_amount(value))?;
    if gwei < BigDecimal::from(0) {
        return Err(ConversionError::invalid_gwei_amount(value));
    }
    let wei = (gwei * BigDecimal::from(1_000_000_000u64))
        .with_scale_round(0, RoundingMode::HalfUp);
    let (int, _) = wei.into_bigint_and_exponent();
    let (_, bytes) = int.to_bytes_be();
    if bytes.len() > 32 {
        return Err(ConversionError::invalid_gwei_amount(value));
    }
    Ok(U256::from_be_slice(&bytes))
}
