// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for native currency amounts in wei
//!
//! All fee arithmetic in this crate happens in wei, the smallest indivisible
//! unit of the network currency, so sums never lose precision. Conversions to
//! ether or gwei for display go through [`crate::units`] and use decimal
//! arithmetic, never binary floating point.

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

use crate::units::{self, ETH_DECIMALS, GWEI_DECIMALS};

/// An amount of native currency in wei.
///
/// Values up to 2^256 - 1 are representable, so a gas fee computed as
/// `gas_used * gas_price` for any pair of explorer-delivered integers can
/// never overflow or truncate.
///
/// # Examples
///
/// ```
/// use gastally::WeiAmount;
///
/// let fee = WeiAmount::from_gas(21_000, 1_000_000_000);
/// assert_eq!(fee.to_eth_string(), "0.000021");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Compute a gas fee as `gas_used * gas_price`, exactly.
    ///
    /// The product of two `u128` values always fits in a `U256`, so this
    /// multiplication cannot overflow.
    pub fn from_gas(gas_used: u128, gas_price: u128) -> Self {
        Self(U256::from(gas_used) * U256::from(gas_price))
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Exact value in ether as a decimal (1 ETH = 10^18 wei)
    pub fn to_eth(&self) -> BigDecimal {
        units::to_decimal_unit(self.0, ETH_DECIMALS)
    }

    /// Value in ether rendered at fixed display scale (6 fractional digits)
    pub fn to_eth_string(&self) -> String {
        units::to_eth_string(self.0)
    }

    /// Exact value in gwei as a decimal (1 gwei = 10^9 wei)
    pub fn to_gwei(&self) -> BigDecimal {
        units::to_decimal_unit(self.0, GWEI_DECIMALS)
    }

    /// Value in gwei rendered at fixed display scale (2 fractional digits)
    pub fn to_gwei_string(&self) -> String {
        units::to_gwei_string(self.0)
    }

    /// Fiat value of this amount given an ether price quote.
    ///
    /// Returns `None` when no quote is available; an absent quote is an
    /// expected condition, not an error.
    pub fn to_fiat(&self, price_per_eth: Option<&BigDecimal>) -> Option<BigDecimal> {
        units::to_fiat_value(self.0, ETH_DECIMALS, price_per_eth)
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for WeiAmount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for WeiAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for WeiAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ETH", self.to_eth_string())
    }
}
