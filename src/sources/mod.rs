// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! External collaborator interfaces
//!
//! The report builder consumes these traits, never the concrete clients, so
//! tests substitute mocks and the wire protocols stay at the edge of the
//! crate. Rate limiting, retries, and network-level error policy belong to
//! the implementations behind these seams, not to the core.

use async_trait::async_trait;
use std::path::Path;

use crate::errors::{ChartError, FetchError};
use crate::types::{DailyBucket, FiatQuote, RawTransactionRecord, WalletAddress, WeiAmount};

mod chart;
mod explorer;
mod rpc;

pub use chart::SvgChartRenderer;
pub use explorer::ExplorerClient;
pub use rpc::RpcGasPriceSource;

/// Source of raw transaction history for a wallet.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch the wallet's transaction records from the explorer.
    ///
    /// An address with no history is a valid empty result, not an error.
    async fn fetch_transaction_history(
        &self,
        address: &WalletAddress,
    ) -> Result<Vec<RawTransactionRecord>, FetchError>;
}

/// Source of the current network gas price.
#[async_trait]
pub trait GasPriceSource: Send + Sync {
    /// Fetch the current gas price in wei.
    async fn fetch_gas_price(&self) -> Result<WeiAmount, FetchError>;
}

/// Source of the Ethereum L1 suggested base fee.
///
/// Optional collaborator: reports are complete without it, but when an L1
/// gas-oracle endpoint is configured the current suggested base fee is
/// surfaced next to the L2 gas price.
#[async_trait]
pub trait BaseFeeSource: Send + Sync {
    /// Fetch the current suggested base fee in wei.
    async fn fetch_base_fee(&self) -> Result<WeiAmount, FetchError>;
}

/// Source of the current fiat price of the native currency.
#[async_trait]
pub trait FiatQuoteSource: Send + Sync {
    /// Fetch a point-in-time fiat quote.
    async fn fetch_fiat_quote(&self) -> Result<FiatQuote, FetchError>;
}

/// Renderer for the daily gas-spend chart.
///
/// A pure function from the daily series to an image file; the output
/// format is inferred from the target path's extension.
pub trait ChartRenderer: Send + Sync {
    /// Render the series to `output`.
    fn render(&self, series: &[DailyBucket], output: &Path) -> Result<(), ChartError>;
}
