// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction normalization
//!
//! One tagged construction step turns a loosely-typed explorer record into a
//! fully valid [`NormalizedTransaction`] or a specific [`ValidationError`],
//! never a partially-populated record. All field coercion happens here: the
//! rest of the crate only ever sees typed values.
//!
//! Batch normalization is tolerant by contract. A malformed record is
//! skipped with a warning naming the record and the reason; it must never
//! abort the report.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::errors::ValidationError;
use crate::types::{NormalizedTransaction, RawTransactionRecord};
use crate::units::parse_base_units;

/// Flag value the explorer uses for a successful transaction. Anything
/// else, including absent or unrecognized values, counts as an error state.
const SUCCESS_FLAG: &str = "0";

/// Validate and convert one raw explorer record.
///
/// Fails with a [`ValidationError`] when a required field is missing, a
/// numeric field does not parse, or the timestamp is unusable. Empty
/// `gasUsed`/`gasPrice` strings coerce to zero; explorers deliver them on
/// some record classes and they are distinct from malformed values.
///
/// # Examples
///
/// ```
/// use gastally::{normalize, RawTransactionRecord};
///
/// let raw = RawTransactionRecord {
///     block_number: Some("12345".into()),
///     time_stamp: Some("1678886400".into()),
///     hash: Some("0xabc".into()),
///     from_address: Some("0xFrom".into()),
///     to_address: Some("0xTo".into()),
///     value: Some("0".into()),
///     gas: Some("50000".into()),
///     gas_price: Some("20000000000".into()),
///     gas_used: Some("21000".into()),
///     is_error: Some("0".into()),
///     txreceipt_status: Some("1".into()),
/// };
///
/// let tx = normalize(&raw).unwrap();
/// assert_eq!(tx.gas_fee.as_u256().to_string(), "420000000000000");
/// ```
pub fn normalize(raw: &RawTransactionRecord) -> Result<NormalizedTransaction, ValidationError> {
    let label = raw
        .hash
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or("<unknown record>")
        .to_owned();
    normalize_labeled(raw, &label)
}

fn normalize_labeled(
    raw: &RawTransactionRecord,
    label: &str,
) -> Result<NormalizedTransaction, ValidationError> {
    let hash = required("hash", &raw.hash, label)?.to_owned();

    let block_number = {
        let s = required("blockNumber", &raw.block_number, label)?;
        s.trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::non_numeric_field("blockNumber", s, label))?
    };

    let timestamp = parse_timestamp(required("timeStamp", &raw.time_stamp, label)?, label)?;

    let from_address = required("from", &raw.from_address, label)?.to_ascii_lowercase();
    let to_address = required("to", &raw.to_address, label)?.to_ascii_lowercase();

    let value = {
        let s = required("value", &raw.value, label)?;
        parse_base_units(s)
            .map(Into::into)
            .map_err(|_| ValidationError::non_numeric_field("value", s, label))?
    };

    let gas_used = parse_gas_field("gasUsed", &raw.gas_used, label)?;
    let gas_price = parse_gas_field("gasPrice", &raw.gas_price, label)?;

    // Exact by construction; the u128 product lives in U256.
    let gas_fee = crate::types::WeiAmount::from_gas(gas_used, gas_price);

    let is_error = raw.is_error.as_deref().map(str::trim) != Some(SUCCESS_FLAG);

    Ok(NormalizedTransaction {
        hash,
        block_number,
        timestamp,
        from_address,
        to_address,
        value,
        gas_used,
        gas_price,
        gas_fee,
        is_error,
    })
}

/// Normalize a batch of raw records, skipping malformed ones.
///
/// Returns the surviving transactions in input order plus one warning per
/// skipped record. The warning names the record by hash, or by position
/// when the hash itself was unusable.
pub fn normalize_all(records: &[RawTransactionRecord]) -> (Vec<NormalizedTransaction>, Vec<String>) {
    let mut transactions = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();

    for (index, raw) in records.iter().enumerate() {
        let label = raw
            .hash
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("record #{index}"));

        match normalize_labeled(raw, &label) {
            Ok(tx) => transactions.push(tx),
            Err(e) => {
                warn!(record = %label, error = %e, "skipping malformed transaction record");
                warnings.push(format!("skipped transaction {label}: {e}"));
            }
        }
    }

    (transactions, warnings)
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
    label: &str,
) -> Result<&'a str, ValidationError> {
    value
        .as_deref()
        .ok_or_else(|| ValidationError::missing_field(field, label))
}

/// Parse a gas field, coercing empty strings to zero.
fn parse_gas_field(
    field: &'static str,
    value: &Option<String>,
    label: &str,
) -> Result<u128, ValidationError> {
    let s = required(field, value, label)?.trim();
    if s.is_empty() {
        return Ok(0);
    }
    s.parse::<u128>()
        .map_err(|_| ValidationError::non_numeric_field(field, s, label))
}

fn parse_timestamp(value: &str, label: &str) -> Result<DateTime<Utc>, ValidationError> {
    let secs = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_timestamp(value, label))?;
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| ValidationError::invalid_timestamp(value, label))
}
