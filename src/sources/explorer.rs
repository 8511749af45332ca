// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan-family block-explorer client
//!
//! Speaks the common `module`/`action` query protocol shared by Etherscan,
//! Basescan, and their forks: every response is an envelope with `status`,
//! `message`, and a polymorphic `result`. One client serves both the
//! transaction-history and the fiat-quote endpoints since they live on the
//! same API surface.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::errors::FetchError;
use crate::sources::{BaseFeeSource, FiatQuoteSource, TransactionSource};
use crate::types::{FiatQuote, RawTransactionRecord, WalletAddress, WeiAmount};
use crate::units::{parse_gwei_units, parse_price};

/// Transactions requested per page
const DEFAULT_PAGE_SIZE: usize = 200;

/// Upper bound on pages fetched per wallet, a guard against a misbehaving
/// API paging forever
const MAX_PAGES: usize = 25;

/// Envelope message explorers return for an address with no history.
/// This is a valid empty result, not an API error.
const NO_TRANSACTIONS: &str = "No transactions found";

/// HTTP client for an Etherscan-family explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    page_size: usize,
}

/// The three-field envelope every explorer response is wrapped in.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct EthPriceResult {
    ethusd: String,
}

#[derive(Debug, Deserialize)]
struct GasOracleResult {
    #[serde(rename = "suggestBaseFee")]
    suggest_base_fee: String,
}

impl ExplorerClient {
    /// Create a client against an explorer base URL.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size used for transaction-history pagination.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    async fn get_envelope(&self, params: &[(&str, String)]) -> Result<Envelope, FetchError> {
        let response = self
            .http
            .get(self.base_url.clone())
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Envelope>().await?)
    }

    async fn fetch_page(
        &self,
        address: &WalletAddress,
        page: usize,
    ) -> Result<Vec<RawTransactionRecord>, FetchError> {
        let params = [
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", address.as_str().to_string()),
            ("startblock", "0".to_string()),
            ("endblock", "99999999".to_string()),
            ("page", page.to_string()),
            ("offset", self.page_size.to_string()),
            ("sort", "desc".to_string()),
            ("apikey", self.api_key.clone()),
        ];

        let envelope = self.get_envelope(&params).await?;

        if envelope.message == NO_TRANSACTIONS {
            return Ok(Vec::new());
        }
        if envelope.status != "1" {
            return Err(FetchError::api(envelope_error(&envelope)));
        }

        serde_json::from_value::<Vec<RawTransactionRecord>>(envelope.result).map_err(|e| {
            FetchError::unexpected_payload("txlist", format!("result is not a transaction list: {e}"))
        })
    }
}

fn envelope_error(envelope: &Envelope) -> String {
    match envelope.result.as_str() {
        Some(detail) if !detail.is_empty() => detail.to_string(),
        _ if !envelope.message.is_empty() => envelope.message.clone(),
        _ => "unknown API error".to_string(),
    }
}

#[async_trait]
impl TransactionSource for ExplorerClient {
    async fn fetch_transaction_history(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<RawTransactionRecord>, FetchError> {
        let mut records = Vec::new();

        for page in 1..=MAX_PAGES {
            let batch = self.fetch_page(address, page).await?;
            let batch_len = batch.len();
            records.extend(batch);
            debug!(page, batch_len, "fetched explorer transaction page");
            if batch_len < self.page_size {
                break;
            }
        }

        info!(
            address = %address,
            count = records.len(),
            "fetched transaction history"
        );
        Ok(records)
    }
}

#[async_trait]
impl FiatQuoteSource for ExplorerClient {
    async fn fetch_fiat_quote(&self) -> Result<FiatQuote, FetchError> {
        let params = [
            ("module", "stats".to_string()),
            ("action", "ethprice".to_string()),
            ("apikey", self.api_key.clone()),
        ];

        let envelope = self.get_envelope(&params).await?;
        if envelope.status != "1" {
            return Err(FetchError::api(envelope_error(&envelope)));
        }

        let price: EthPriceResult = serde_json::from_value(envelope.result).map_err(|e| {
            FetchError::unexpected_payload("ethprice", format!("missing ethusd field: {e}"))
        })?;

        let price_per_eth = parse_price(&price.ethusd).map_err(|e| {
            FetchError::unexpected_payload("ethprice", e.to_string())
        })?;

        Ok(FiatQuote {
            price_per_eth,
            as_of: Utc::now(),
        })
    }
}

#[async_trait]
impl BaseFeeSource for ExplorerClient {
    async fn fetch_base_fee(&self) -> Result<WeiAmount, FetchError> {
        let params = [
            ("module", "gastracker".to_string()),
            ("action", "gasoracle".to_string()),
            ("apikey", self.api_key.clone()),
        ];

        let envelope = self.get_envelope(&params).await?;
        if envelope.status != "1" {
            return Err(FetchError::api(envelope_error(&envelope)));
        }

        // The oracle quotes the base fee in gwei with a fractional part.
        let oracle: GasOracleResult = serde_json::from_value(envelope.result).map_err(|e| {
            FetchError::unexpected_payload("gasoracle", format!("missing suggestBaseFee field: {e}"))
        })?;
        let wei = parse_gwei_units(&oracle.suggest_base_fee)
            .map_err(|e| FetchError::unexpected_payload("gasoracle", e.to_string()))?;

        Ok(WeiAmount::new(wei))
    }
}
