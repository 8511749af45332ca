// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Timeframe filtering and gas-fee aggregation
//!
//! Pure functions over slices of normalized transactions. Windows are
//! inclusive on both bounds; daily bucketing uses the UTC calendar day so
//! results never depend on the host timezone.
//!
//! Policy: a transaction that reverted on-chain still consumed gas, so its
//! fee counts toward every total. Aggregation excludes nothing that
//! survived normalization.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::types::{DailyBucket, NormalizedTransaction, Period, PeriodAggregate, WeiAmount};

/// Select the transactions whose timestamp falls within `[start, end]`.
///
/// Both bounds are inclusive and optional: `None` start means "since
/// epoch", `None` end means "through latest available". Input order is
/// preserved and no sortedness is assumed; this is a linear scan.
pub fn filter_by_window<'a>(
    transactions: &'a [NormalizedTransaction],
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> Vec<&'a NormalizedTransaction> {
    transactions
        .iter()
        .filter(|tx| start.is_none_or(|s| tx.timestamp >= s))
        .filter(|tx| end.is_none_or(|e| tx.timestamp <= e))
        .collect()
}

/// Sum gas fees over a set of transactions, in wei.
pub fn sum_gas_fees<'a>(
    transactions: impl IntoIterator<Item = &'a NormalizedTransaction>,
) -> WeiAmount {
    transactions.into_iter().map(|tx| tx.gas_fee).sum()
}

/// Aggregate gas spend for one period anchored at `now`.
///
/// `now` is sampled once per report by the caller and passed to every
/// period so the three aggregates share consistent boundaries.
pub fn aggregate_period(
    period: Period,
    now: DateTime<Utc>,
    transactions: &[NormalizedTransaction],
    price_per_eth: Option<&BigDecimal>,
) -> PeriodAggregate {
    let (window_start, window_end) = period.window(now);
    let selected = filter_by_window(transactions, window_start, window_end);
    let total_gas_fee = sum_gas_fees(selected);

    PeriodAggregate {
        period,
        window_start,
        window_end,
        total_gas_fee,
        total_eth: total_gas_fee.to_eth_string(),
        total_fiat: total_gas_fee.to_fiat(price_per_eth),
    }
}

/// Group transactions into per-day totals, ascending by UTC calendar day.
///
/// Days with no transactions are absent from the output; the chart step
/// handles gap-filling if it needs a continuous axis.
pub fn bucket_by_day<'a>(
    transactions: impl IntoIterator<Item = &'a NormalizedTransaction>,
) -> Vec<DailyBucket> {
    let mut days: BTreeMap<chrono::NaiveDate, WeiAmount> = BTreeMap::new();
    for tx in transactions {
        let day = tx.timestamp.date_naive();
        let total = days.entry(day).or_insert(WeiAmount::ZERO);
        *total = *total + tx.gas_fee;
    }
    days.into_iter()
        .map(|(day, total_gas_fee)| DailyBucket { day, total_gas_fee })
        .collect()
}

/// Build the daily series for the charting window.
///
/// The window is the same inclusive `[now - 30d, now]` range as the
/// 30-day aggregate, so the series totals reconcile with it exactly.
pub fn daily_series(
    transactions: &[NormalizedTransaction],
    now: DateTime<Utc>,
) -> Vec<DailyBucket> {
    let (start, end) = Period::Last30Days.window(now);
    bucket_by_day(filter_by_window(transactions, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn tx_at(timestamp: DateTime<Utc>, gas_used: u128, gas_price: u128) -> NormalizedTransaction {
        NormalizedTransaction {
            hash: format!("0x{:x}", timestamp.timestamp()),
            block_number: 1,
            timestamp,
            from_address: "0xfrom".into(),
            to_address: "0xto".into(),
            value: WeiAmount::ZERO,
            gas_used,
            gas_price,
            gas_fee: WeiAmount::from_gas(gas_used, gas_price),
            is_error: false,
        }
    }

    #[test]
    fn filter_includes_both_boundaries() {
        let start = Utc::now() - Duration::days(7);
        let end = Utc::now();
        let txs = vec![
            tx_at(start, 1, 1),
            tx_at(start + Duration::days(1), 1, 1),
            tx_at(end, 1, 1),
            tx_at(start - Duration::seconds(1), 1, 1),
            tx_at(end + Duration::seconds(1), 1, 1),
        ];

        let selected = filter_by_window(&txs, Some(start), Some(end));
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().any(|tx| tx.timestamp == start));
        assert!(selected.iter().any(|tx| tx.timestamp == end));
    }

    #[test]
    fn filter_open_bounds() {
        let now = Utc::now();
        let txs = vec![
            tx_at(now - Duration::days(100), 1, 1),
            tx_at(now, 1, 1),
        ];

        assert_eq!(filter_by_window(&txs, None, None).len(), 2);
        assert_eq!(
            filter_by_window(&txs, Some(now - Duration::days(1)), None).len(),
            1
        );
        assert_eq!(
            filter_by_window(&txs, None, Some(now - Duration::days(1))).len(),
            1
        );
    }

    #[test]
    fn filter_preserves_order_on_unsorted_input() {
        let now = Utc::now();
        let txs = vec![
            tx_at(now - Duration::days(1), 1, 1),
            tx_at(now - Duration::days(5), 2, 1),
            tx_at(now - Duration::days(3), 3, 1),
        ];

        let selected = filter_by_window(&txs, Some(now - Duration::days(7)), Some(now));
        let gas: Vec<u128> = selected.iter().map(|tx| tx.gas_used).collect();
        assert_eq!(gas, vec![1, 2, 3]);
    }

    #[test]
    fn aggregate_counts_reverted_transactions() {
        let now = Utc::now();
        let mut failed = tx_at(now - Duration::days(1), 50_000, 1_000_000_000);
        failed.is_error = true;
        let ok = tx_at(now - Duration::days(2), 21_000, 1_000_000_000);
        let txs = vec![failed, ok];

        let agg = aggregate_period(Period::Last7Days, now, &txs, None);
        assert_eq!(
            agg.total_gas_fee,
            WeiAmount::from_gas(71_000, 1_000_000_000)
        );
    }

    #[test]
    fn aggregate_is_idempotent() {
        let now = Utc::now();
        let txs = vec![
            tx_at(now - Duration::days(1), 21_000, 7_000_000_000),
            tx_at(now - Duration::days(2), 40_000, 3_000_000_000),
        ];

        let first = aggregate_period(Period::Last30Days, now, &txs, None);
        let second = aggregate_period(Period::Last30Days, now, &txs, None);
        assert_eq!(first.total_gas_fee, second.total_gas_fee);
        assert_eq!(first.total_eth, second.total_eth);
    }

    #[test]
    fn three_transactions_across_week_scenario() {
        // Three 21000-gas transactions at 1 gwei on three different days
        // within the last 7 days.
        let now = Utc::now();
        let txs = vec![
            tx_at(now - Duration::days(1), 21_000, 1_000_000_000),
            tx_at(now - Duration::days(3), 21_000, 1_000_000_000),
            tx_at(now - Duration::days(5), 21_000, 1_000_000_000),
        ];

        let week = aggregate_period(Period::Last7Days, now, &txs, None);
        assert_eq!(
            week.total_gas_fee.as_u256().to_string(),
            "63000000000000"
        );

        let month = aggregate_period(Period::Last30Days, now, &txs, None);
        let all = aggregate_period(Period::AllTime, now, &txs, None);
        assert!(month.total_gas_fee >= week.total_gas_fee);
        assert!(all.total_gas_fee >= week.total_gas_fee);
    }

    #[test]
    fn buckets_are_ascending_and_omit_empty_days() {
        // Fixed midday anchor so the one-hour offset stays within its day.
        let now = chrono::TimeZone::with_ymd_and_hms(&Utc, 2026, 6, 15, 12, 0, 0).unwrap();
        let txs = vec![
            tx_at(now - Duration::days(1), 2, 1),
            tx_at(now - Duration::days(9), 1, 1),
            tx_at(now - Duration::days(9) + Duration::hours(1), 3, 1),
        ];

        let buckets = bucket_by_day(&txs);
        assert_eq!(buckets.len(), 2);
        assert!(buckets[0].day < buckets[1].day);
        assert_eq!(buckets[0].total_gas_fee, WeiAmount::from(4u64));
        assert_eq!(buckets[1].total_gas_fee, WeiAmount::from(2u64));
    }

    #[test]
    fn bucket_totals_reconcile_with_window_aggregate() {
        let now = Utc::now();
        let txs = vec![
            tx_at(now - Duration::days(1), 21_000, 5_000_000_000),
            tx_at(now - Duration::days(4), 33_000, 2_000_000_000),
            tx_at(now - Duration::days(12), 21_000, 9_000_000_000),
            // Outside the 30-day chart window, must not appear
            tx_at(now - Duration::days(45), 21_000, 1_000_000_000),
        ];

        let series = daily_series(&txs, now);
        let series_total: WeiAmount = series.iter().map(|b| b.total_gas_fee).sum();
        let month = aggregate_period(Period::Last30Days, now, &txs, None);
        assert_eq!(series_total, month.total_gas_fee);
    }

    #[test]
    fn aggregate_fiat_follows_quote_availability() {
        use std::str::FromStr;
        let now = Utc::now();
        let txs = vec![tx_at(now - Duration::days(1), 21_000, 1_000_000_000)];

        let no_quote = aggregate_period(Period::Last7Days, now, &txs, None);
        assert_eq!(no_quote.total_fiat, None);

        let price = BigDecimal::from_str("2000").unwrap();
        let quoted = aggregate_period(Period::Last7Days, now, &txs, Some(&price));
        // 0.000021 ETH * 2000 = 0.042, rounded to cents
        assert_eq!(quoted.total_fiat, Some(BigDecimal::from_str("0.04").unwrap()));
    }
}
