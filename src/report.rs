// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Report orchestration
//!
//! [`ReportBuilder`] drives the end-to-end flow: fetch raw history, a gas
//! price, and a fiat quote from the external collaborators, normalize,
//! aggregate per period, build the daily chart series, and assemble one
//! [`Report`].
//!
//! The resilience contract: `build_report` always returns a `Report`, never
//! an error, even when every external call failed. Partial failure is
//! threaded through as accumulated warnings, not suppressed exceptions; in
//! the worst case the report carries only warnings and zeroed aggregates.

use chrono::Utc;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Instrument};

use crate::aggregate::{aggregate_period, daily_series};
use crate::config::TrackerConfig;
use crate::errors::FetchError;
use crate::normalize::normalize_all;
use crate::sources::{
    BaseFeeSource, ChartRenderer, FiatQuoteSource, GasPriceSource, TransactionSource,
};
use crate::tracing::spans;
use crate::types::{Period, Report, WalletAddress};

/// Per-process sequence folded into chart filenames so two reports for the
/// same wallet in the same second get distinct files.
static CHART_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Builds gas-spend reports from the four external collaborators.
///
/// Holds no mutable state; each call to [`build_report`](Self::build_report)
/// builds its report from scratch, so concurrent requests never interfere.
pub struct ReportBuilder {
    transactions: Arc<dyn TransactionSource>,
    gas_price: Arc<dyn GasPriceSource>,
    fiat: Arc<dyn FiatQuoteSource>,
    base_fee: Option<Arc<dyn BaseFeeSource>>,
    chart: Arc<dyn ChartRenderer>,
    config: TrackerConfig,
}

impl ReportBuilder {
    /// Create a builder over the given collaborators.
    pub fn new(
        transactions: Arc<dyn TransactionSource>,
        gas_price: Arc<dyn GasPriceSource>,
        fiat: Arc<dyn FiatQuoteSource>,
        chart: Arc<dyn ChartRenderer>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            transactions,
            gas_price,
            fiat,
            base_fee: None,
            chart,
            config,
        }
    }

    /// Attach an L1 gas-oracle source.
    ///
    /// Without one the report's `l1_base_fee` stays `None` and no warning
    /// is recorded; an unconfigured oracle is not a degraded fetch.
    pub fn with_base_fee_source(mut self, source: Arc<dyn BaseFeeSource>) -> Self {
        self.base_fee = Some(source);
        self
    }

    /// Build the full gas-spend report for a wallet.
    ///
    /// The address is assumed syntactically valid; validation happens at
    /// the edges before this is invoked. An address with no history yields
    /// a report with zeroed aggregates and a "no transactions found"
    /// warning, not an error.
    pub async fn build_report(&self, address: &WalletAddress) -> Report {
        let span = spans::build_report(address.as_str());
        self.build_report_inner(address).instrument(span).await
    }

    async fn build_report_inner(&self, address: &WalletAddress) -> Report {
        let mut warnings: Vec<String> = Vec::new();
        let deadline = self.config.fetch_timeout;

        // The three fetches are independent; issue them concurrently and
        // record each failure in isolation.
        let (history, gas_price, quote, base_fee) = tokio::join!(
            fetch_with_deadline(
                deadline,
                "transaction_history",
                self.transactions.fetch_transaction_history(address),
            ),
            fetch_with_deadline(deadline, "gas_price", self.gas_price.fetch_gas_price()),
            fetch_with_deadline(deadline, "fiat_quote", self.fiat.fetch_fiat_quote()),
            async {
                match &self.base_fee {
                    Some(source) => Some(
                        fetch_with_deadline(deadline, "l1_base_fee", source.fetch_base_fee())
                            .await,
                    ),
                    None => None,
                }
            },
        );

        let (raw_records, history_failed) = match history {
            Ok(records) => (records, false),
            Err(e) => {
                warn!(error = %e, "transaction history unavailable");
                warnings.push(format!("failed to fetch transaction history: {e}"));
                (Vec::new(), true)
            }
        };
        if !history_failed && raw_records.is_empty() {
            warnings.push(format!("no transactions found for wallet {address}"));
        }

        let l2_gas_price = match gas_price {
            Ok(price) => Some(price),
            Err(e) => {
                warn!(error = %e, "network gas price unavailable");
                warnings.push(format!("failed to fetch network gas price: {e}"));
                None
            }
        };

        let l1_base_fee = match base_fee {
            Some(Ok(fee)) => Some(fee),
            Some(Err(e)) => {
                warn!(error = %e, "L1 base fee unavailable");
                warnings.push(format!("failed to fetch L1 base fee: {e}"));
                None
            }
            None => None,
        };

        let fiat_quote = match quote {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(error = %e, "fiat quote unavailable");
                warnings.push(format!("failed to fetch fiat quote: {e}"));
                None
            }
        };

        let transactions = {
            let span = spans::normalize_records(raw_records.len());
            let _guard = span.enter();
            let (transactions, mut skipped) = normalize_all(&raw_records);
            warnings.append(&mut skipped);
            transactions
        };

        // One "now" for every period, so the three windows are mutually
        // consistent.
        let now = Utc::now();
        let price = fiat_quote.as_ref().map(|q| &q.price_per_eth);

        let aggregates = Period::ALL
            .iter()
            .map(|period| aggregate_period(*period, now, &transactions, price))
            .collect();

        let series = daily_series(&transactions, now);

        let mut recent = transactions;
        recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        let had_transactions = !recent.is_empty();
        recent.truncate(self.config.display_limit);

        let chart_path = if series.is_empty() {
            if had_transactions {
                warnings.push("no transactions in the last 30 days to chart".to_string());
            }
            None
        } else {
            let sequence = CHART_SEQUENCE.fetch_add(1, Ordering::Relaxed);
            let file = self.config.chart_dir.join(format!(
                "gas_chart_{}_{}_{sequence}.svg",
                address.short(),
                now.format("%Y%m%d%H%M%S"),
            ));
            let span = spans::render_chart(series.len());
            let _guard = span.enter();
            match self.chart.render(&series, &file) {
                Ok(()) => Some(file),
                Err(e) => {
                    warn!(error = %e, "chart rendering failed");
                    warnings.push(format!("chart rendering failed: {e}"));
                    None
                }
            }
        };

        info!(
            wallet_address = %address,
            transactions = recent.len(),
            warnings = warnings.len(),
            "report built"
        );

        Report {
            wallet_address: address.as_str().to_string(),
            l2_gas_price,
            l1_base_fee,
            fiat_quote,
            aggregates,
            daily_series: series,
            recent_transactions: recent,
            chart_path,
            warnings,
        }
    }
}

/// Run one collaborator fetch under the caller-imposed deadline.
///
/// A missed deadline degrades to a `FetchError::Timeout` for that piece of
/// data; it never cancels the rest of the report.
async fn fetch_with_deadline<T>(
    deadline: Duration,
    source_name: &'static str,
    fut: impl Future<Output = Result<T, FetchError>>,
) -> Result<T, FetchError> {
    let span = spans::fetch(source_name);
    match tokio::time::timeout(deadline, fut.instrument(span)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::timeout(deadline)),
    }
}
