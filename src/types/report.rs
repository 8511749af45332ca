// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Report aggregate types
//!
//! A [`Report`] is the aggregate root handed to both the CLI presenter and
//! the JSON API. It is built once per request and immutable once returned.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::transaction::NormalizedTransaction;
use crate::types::wei::WeiAmount;

/// A reporting period relative to "now".
///
/// "Now" is sampled once per report and reused for every period so the
/// three aggregates are mutually consistent; boundaries never shift between
/// computations within one report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// `[now - 7d, now]`
    #[serde(rename = "last_7_days")]
    Last7Days,
    /// `[now - 30d, now]`
    #[serde(rename = "last_30_days")]
    Last30Days,
    /// Unbounded
    AllTime,
}

impl Period {
    /// Every configured period, in display order.
    pub const ALL: [Period; 3] = [Period::Last7Days, Period::Last30Days, Period::AllTime];

    /// Stable label used in report output.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Last7Days => "last_7_days",
            Period::Last30Days => "last_30_days",
            Period::AllTime => "all_time",
        }
    }

    /// The inclusive time window this period covers, anchored at `now`.
    ///
    /// `None` bounds mean unbounded on that side.
    pub fn window(&self, now: DateTime<Utc>) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        match self {
            Period::Last7Days => (Some(now - Duration::days(7)), Some(now)),
            Period::Last30Days => (Some(now - Duration::days(30)), Some(now)),
            Period::AllTime => (None, None),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Total gas spend over one reporting period.
///
/// Invariant: `total_gas_fee` is the sum of `gas_fee` over exactly the
/// normalized transactions whose timestamp falls within
/// `[window_start, window_end]` (inclusive). Reverted transactions count;
/// they consumed gas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodAggregate {
    /// The period this aggregate covers
    pub period: Period,

    /// Inclusive lower bound, absent for all-time
    pub window_start: Option<DateTime<Utc>>,

    /// Inclusive upper bound, absent for all-time
    pub window_end: Option<DateTime<Utc>>,

    /// Total gas spend in wei
    pub total_gas_fee: WeiAmount,

    /// Total rendered in ether at display scale
    pub total_eth: String,

    /// Total in fiat, `None` when no price quote was available
    pub total_fiat: Option<BigDecimal>,
}

/// Gas spend for one UTC calendar day.
///
/// Days with zero transactions are absent from a series, not zero-filled;
/// the chart renderer handles gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBucket {
    /// UTC calendar day
    pub day: NaiveDate,

    /// Total gas spend in wei on that day
    pub total_gas_fee: WeiAmount,
}

/// A point-in-time fiat price snapshot for the native currency.
///
/// Fetched once per report run. `as_of` is advisory; the quote is not
/// re-validated against transaction timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiatQuote {
    /// Fiat price of one whole unit (ETH) of native currency
    pub price_per_eth: BigDecimal,

    /// When the quote was taken
    pub as_of: DateTime<Utc>,
}

/// The full gas-spend report for one wallet.
///
/// Always returned, never an error: in the worst case every external fetch
/// failed and the report carries only warnings and zeroed aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// The wallet this report covers (canonical lowercase)
    pub wallet_address: String,

    /// Current L2 network gas price, `None` when the RPC fetch failed
    pub l2_gas_price: Option<WeiAmount>,

    /// Current Ethereum L1 suggested base fee, `None` when no gas-oracle
    /// source is configured or its fetch failed
    pub l1_base_fee: Option<WeiAmount>,

    /// Current fiat quote, `None` when the price fetch failed
    pub fiat_quote: Option<FiatQuote>,

    /// One aggregate per configured period
    pub aggregates: Vec<PeriodAggregate>,

    /// Daily gas spend over the charting window, ascending by day
    pub daily_series: Vec<DailyBucket>,

    /// Most recent transactions, most-recent-first, bounded by the
    /// configured display limit
    pub recent_transactions: Vec<NormalizedTransaction>,

    /// Where the rendered chart was written, `None` when rendering was
    /// skipped or failed
    pub chart_path: Option<PathBuf>,

    /// Human-readable warnings collected during the run
    pub warnings: Vec<String>,
}

impl Report {
    /// Look up the aggregate for a period.
    pub fn aggregate(&self, period: Period) -> Option<&PeriodAggregate> {
        self.aggregates.iter().find(|a| a.period == period)
    }
}
