// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for gastally integration tests
//!
//! Provides mock implementations of the collaborator traits so report
//! orchestration can be tested without network access.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use gastally::{
    BaseFeeSource, ChartError, ChartRenderer, DailyBucket, FetchError, FiatQuote,
    FiatQuoteSource, GasPriceSource, RawTransactionRecord, TransactionSource, WalletAddress,
    WeiAmount,
};

/// A syntactically valid test wallet.
pub const TEST_WALLET: &str = "0xabcd000000000000000000000000000000001234";

/// Build a raw explorer record with the given hash, timestamp, and gas
/// figures; every other field gets a plausible default.
pub fn raw_tx(hash: &str, unix_seconds: i64, gas_used: u64, gas_price: u64) -> RawTransactionRecord {
    RawTransactionRecord {
        block_number: Some("1000".into()),
        time_stamp: Some(unix_seconds.to_string()),
        hash: Some(hash.into()),
        from_address: Some("0xFrom".into()),
        to_address: Some("0xTo".into()),
        value: Some("0".into()),
        gas: Some("100000".into()),
        gas_price: Some(gas_price.to_string()),
        gas_used: Some(gas_used.to_string()),
        is_error: Some("0".into()),
        txreceipt_status: Some("1".into()),
    }
}

/// Parse the canonical test wallet.
pub fn test_wallet() -> WalletAddress {
    TEST_WALLET.parse().unwrap()
}

/// Mock transaction-history source.
///
/// Returns configured records, a configured failure, or sleeps past any
/// deadline to exercise timeout degradation.
#[derive(Default)]
pub struct MockTransactionSource {
    records: Vec<RawTransactionRecord>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockTransactionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, records: Vec<RawTransactionRecord>) -> Self {
        self.records = records;
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl TransactionSource for MockTransactionSource {
    async fn fetch_transaction_history(
        &self,
        _address: &WalletAddress,
    ) -> Result<Vec<RawTransactionRecord>, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.failure {
            Some(message) => Err(FetchError::api(message.clone())),
            None => Ok(self.records.clone()),
        }
    }
}

/// Mock gas-price source; `None` means the fetch fails.
pub struct MockGasPriceSource {
    price: Option<WeiAmount>,
}

impl MockGasPriceSource {
    pub fn returning(price: WeiAmount) -> Self {
        Self { price: Some(price) }
    }

    pub fn failing() -> Self {
        Self { price: None }
    }
}

#[async_trait]
impl GasPriceSource for MockGasPriceSource {
    async fn fetch_gas_price(&self) -> Result<WeiAmount, FetchError> {
        self.price
            .ok_or_else(|| FetchError::rpc("mock RPC unreachable"))
    }
}

/// Mock L1 gas-oracle source; `None` means the fetch fails.
pub struct MockBaseFeeSource {
    fee: Option<WeiAmount>,
}

impl MockBaseFeeSource {
    pub fn returning(fee: WeiAmount) -> Self {
        Self { fee: Some(fee) }
    }

    pub fn failing() -> Self {
        Self { fee: None }
    }
}

#[async_trait]
impl BaseFeeSource for MockBaseFeeSource {
    async fn fetch_base_fee(&self) -> Result<WeiAmount, FetchError> {
        self.fee
            .ok_or_else(|| FetchError::api("mock gas oracle down"))
    }
}

/// Mock fiat-quote source; `None` means the fetch fails.
pub struct MockFiatQuoteSource {
    price: Option<BigDecimal>,
}

impl MockFiatQuoteSource {
    pub fn returning(price: BigDecimal) -> Self {
        Self { price: Some(price) }
    }

    pub fn failing() -> Self {
        Self { price: None }
    }
}

#[async_trait]
impl FiatQuoteSource for MockFiatQuoteSource {
    async fn fetch_fiat_quote(&self) -> Result<FiatQuote, FetchError> {
        match &self.price {
            Some(price) => Ok(FiatQuote {
                price_per_eth: price.clone(),
                as_of: Utc::now(),
            }),
            None => Err(FetchError::api("mock price endpoint down")),
        }
    }
}

/// Chart renderer that records calls instead of writing files.
#[derive(Default)]
pub struct RecordingChartRenderer {
    fail: bool,
    pub rendered: Mutex<Vec<(usize, PathBuf)>>,
}

impl RecordingChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ChartRenderer for RecordingChartRenderer {
    fn render(&self, series: &[DailyBucket], output: &Path) -> Result<(), ChartError> {
        if self.fail {
            return Err(ChartError::EmptySeries);
        }
        self.rendered
            .lock()
            .unwrap()
            .push((series.len(), output.to_path_buf()));
        Ok(())
    }
}
