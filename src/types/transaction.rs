// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw and normalized transaction records
//!
//! [`RawTransactionRecord`] mirrors the explorer wire format: every numeric
//! field arrives as a decimal string and any field may be absent. The
//! normalizer in [`crate::normalize`] is the only place that turns one into
//! a [`NormalizedTransaction`]; downstream code never sees a raw record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;
use crate::types::wei::WeiAmount;

/// One transaction as delivered by an Etherscan-family explorer API.
///
/// All fields are optional strings. Explorer responses are inconsistent
/// enough (missing receipt status on old transactions, empty gas fields on
/// some internal records) that assuming presence here would push parse
/// failures into serde, where they would abort the whole page instead of
/// one record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTransactionRecord {
    /// Block number as a decimal string
    #[serde(rename = "blockNumber")]
    pub block_number: Option<String>,

    /// Unix-seconds timestamp as a decimal string
    #[serde(rename = "timeStamp")]
    pub time_stamp: Option<String>,

    /// Transaction hash, the idempotency key within a wallet's history
    pub hash: Option<String>,

    /// Sender address (letter-casing varies by explorer)
    #[serde(rename = "from")]
    pub from_address: Option<String>,

    /// Receiver address (letter-casing varies by explorer)
    #[serde(rename = "to")]
    pub to_address: Option<String>,

    /// Transferred value in wei, as a decimal string
    pub value: Option<String>,

    /// Gas limit, as a decimal string
    pub gas: Option<String>,

    /// Gas price in wei, as a decimal string
    #[serde(rename = "gasPrice")]
    pub gas_price: Option<String>,

    /// Gas consumed, as a decimal string
    #[serde(rename = "gasUsed")]
    pub gas_used: Option<String>,

    /// On-chain error flag: "0" means success, anything else is an error
    #[serde(rename = "isError")]
    pub is_error: Option<String>,

    /// Receipt status flag ("1" success, "0" reverted, absent pre-Byzantium)
    #[serde(rename = "txreceipt_status")]
    pub txreceipt_status: Option<String>,
}

/// The validated, typed form of one transaction.
///
/// Constructed once by [`crate::normalize::normalize`] and immutable
/// thereafter. Invariant: `gas_fee` is exactly `gas_used * gas_price` for
/// every record that survives normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTransaction {
    /// Transaction hash
    pub hash: String,

    /// Block number
    pub block_number: u64,

    /// Block timestamp (UTC)
    pub timestamp: DateTime<Utc>,

    /// Sender address, lowercased for canonical comparison
    pub from_address: String,

    /// Receiver address, lowercased for canonical comparison
    pub to_address: String,

    /// Transferred value in wei
    pub value: WeiAmount,

    /// Gas consumed by the transaction
    pub gas_used: u128,

    /// Gas price paid, in wei per gas unit
    pub gas_price: u128,

    /// Total gas fee in wei, exactly `gas_used * gas_price`
    pub gas_fee: WeiAmount,

    /// Whether the transaction reverted on-chain. Reverted transactions
    /// still consumed gas; their fees count toward every aggregate.
    pub is_error: bool,
}

/// A syntactically valid wallet address.
///
/// Validation happens at the edges (CLI argument, API path segment) before
/// the report builder is ever invoked: the input must start with `0x` and
/// be exactly 42 characters. The stored form is lowercase, matching the
/// canonical casing used for all address comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// The fixed address prefix
    const PREFIX: &'static str = "0x";

    /// Total length of a well-formed address: `0x` + 40 hex digits
    const LEN: usize = 42;

    /// Borrow the canonical (lowercase) address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short display form, `0xabcd_1234`, used in file names and logs.
    pub fn short(&self) -> String {
        format!("{}_{}", &self.0[..6], &self.0[Self::LEN - 4..])
    }
}

impl FromStr for WalletAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.starts_with(Self::PREFIX) || trimmed.len() != Self::LEN {
            return Err(ValidationError::invalid_address(s));
        }
        if !trimmed[Self::PREFIX.len()..]
            .bytes()
            .all(|b| b.is_ascii_hexdigit())
        {
            return Err(ValidationError::invalid_address(s));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_record_deserializes_explorer_payload() {
        let json = r#"{
            "blockNumber": "12345",
            "timeStamp": "1678886400",
            "hash": "0xabcdef123456",
            "from": "0xFromAddress",
            "to": "0xToAddress",
            "value": "1000000000000000000",
            "gas": "50000",
            "gasPrice": "20000000000",
            "gasUsed": "21000",
            "isError": "0",
            "txreceipt_status": "1"
        }"#;
        let record: RawTransactionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hash.as_deref(), Some("0xabcdef123456"));
        assert_eq!(record.gas_used.as_deref(), Some("21000"));
        assert_eq!(record.from_address.as_deref(), Some("0xFromAddress"));
    }

    #[test]
    fn raw_record_tolerates_missing_fields() {
        let record: RawTransactionRecord = serde_json::from_str(r#"{"hash": "0xabc"}"#).unwrap();
        assert_eq!(record.hash.as_deref(), Some("0xabc"));
        assert!(record.gas_used.is_none());
        assert!(record.txreceipt_status.is_none());
    }

    #[test]
    fn wallet_address_accepts_and_lowercases() {
        let addr: WalletAddress = "0xAbCd000000000000000000000000000000001234"
            .parse()
            .unwrap();
        assert_eq!(addr.as_str(), "0xabcd000000000000000000000000000000001234");
    }

    #[test]
    fn wallet_address_rejects_bad_input() {
        assert!("".parse::<WalletAddress>().is_err());
        assert!("abcd000000000000000000000000000000001234ab"
            .parse::<WalletAddress>()
            .is_err());
        assert!("0x1234".parse::<WalletAddress>().is_err());
        assert!("0xzzzz000000000000000000000000000000001234"
            .parse::<WalletAddress>()
            .is_err());
    }

    #[test]
    fn wallet_address_short_form() {
        let addr: WalletAddress = "0xabcd000000000000000000000000000000001234"
            .parse()
            .unwrap();
        assert_eq!(addr.short(), "0xabcd_1234");
    }
}
