// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Network gas-price source backed by a JSON-RPC provider.

use alloy_provider::{Provider, RootProvider};
use alloy_rpc_client::RpcClient;
use alloy_transport_http::Http;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::errors::FetchError;
use crate::sources::GasPriceSource;
use crate::types::WeiAmount;

/// Fetches the current gas price over `eth_gasPrice` from an L2 RPC
/// endpoint.
#[derive(Debug, Clone)]
pub struct RpcGasPriceSource {
    provider: RootProvider,
}

impl RpcGasPriceSource {
    /// Create a source against an RPC URL.
    pub fn new(rpc_url: &str) -> Result<Self, FetchError> {
        let url: Url = rpc_url
            .parse()
            .map_err(|e| FetchError::rpc(format!("invalid RPC URL {rpc_url:?}: {e}")))?;

        // A bare RootProvider is enough; this source only reads the gas
        // price and never fills or signs transactions.
        let http = Http::new(url);
        let client = RpcClient::new(http, false);
        Ok(Self {
            provider: RootProvider::new(client),
        })
    }
}

#[async_trait]
impl GasPriceSource for RpcGasPriceSource {
    async fn fetch_gas_price(&self) -> Result<WeiAmount, FetchError> {
        let wei = self
            .provider
            .get_gas_price()
            .await
            .map_err(|e| FetchError::rpc(e.to_string()))?;
        debug!(gas_price_wei = wei, "fetched network gas price");
        Ok(WeiAmount::from(wei))
    }
}
