use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bigdecimal::RoundingMode;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use url::Url;

use crate::api::serve_api;
use crate::config::{TrackerConfig, TrackerConfigBuilder};
use crate::report::ReportBuilder;
use crate::sources::{ExplorerClient, RpcGasPriceSource, SvgChartRenderer};
use crate::types::{Report, WalletAddress};
use crate::units::FIAT_SCALE;

/// Main entry point for the application.
///
/// With a wallet address (first CLI argument or `WALLET_ADDRESS`) the
/// report is printed once and the process exits; without one, the JSON API
/// is served.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = config_from_env()?;
    let builder = Arc::new(build_report_builder(config.clone())?);

    let wallet = std::env::args()
        .nth(1)
        .or_else(|| dotenvy::var("WALLET_ADDRESS").ok());

    if let Some(wallet) = wallet {
        let address: WalletAddress = wallet
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid wallet address {wallet:?}: {e}"))?;
        let report = builder.build_report(&address).await;
        print_report(&report);
        return Ok(());
    }

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.api_port)).await?;
    serve_api(listener, builder).await
}

/// Wire the concrete collaborators behind the report builder.
///
/// The explorer client serves both transaction history and the fiat quote;
/// they live on the same API surface.
pub fn build_report_builder(config: TrackerConfig) -> anyhow::Result<ReportBuilder> {
    let explorer_url: Url = config
        .explorer_url
        .parse()
        .with_context(|| format!("invalid explorer URL {:?}", config.explorer_url))?;

    let explorer = Arc::new(ExplorerClient::new(
        explorer_url,
        config.explorer_api_key.clone(),
    ));
    let gas_price = Arc::new(RpcGasPriceSource::new(&config.rpc_url)?);
    let chart = Arc::new(SvgChartRenderer::new());

    let l1_oracle = match &config.l1_explorer_api_key {
        Some(key) => {
            let l1_url: Url = config
                .l1_explorer_url
                .parse()
                .with_context(|| format!("invalid L1 explorer URL {:?}", config.l1_explorer_url))?;
            Some(Arc::new(ExplorerClient::new(l1_url, key.clone())))
        }
        None => {
            tracing::warn!("no L1 explorer API key configured, skipping Ethereum base fee");
            None
        }
    };

    let mut builder = ReportBuilder::new(
        explorer.clone(),
        gas_price,
        explorer,
        chart,
        config,
    );
    if let Some(oracle) = l1_oracle {
        builder = builder.with_base_fee_source(oracle);
    }

    Ok(builder)
}

fn config_from_env() -> anyhow::Result<TrackerConfig> {
    let mut builder = TrackerConfigBuilder::with_defaults();

    builder = builder.explorer_api_key(
        dotenvy::var("EXPLORER_API_KEY").context("EXPLORER_API_KEY must be set")?,
    );
    if let Ok(url) = dotenvy::var("EXPLORER_API_URL") {
        builder = builder.explorer_url(url);
    }
    if let Ok(url) = dotenvy::var("RPC_URL") {
        builder = builder.rpc_url(url);
    }
    if let Ok(key) = dotenvy::var("ETHERSCAN_API_KEY") {
        builder = builder.l1_explorer_api_key(key);
    }
    if let Ok(url) = dotenvy::var("L1_EXPLORER_API_URL") {
        builder = builder.l1_explorer_url(url);
    }
    if let Ok(secs) = dotenvy::var("FETCH_TIMEOUT_SECS") {
        let secs: u64 = secs.parse().context("FETCH_TIMEOUT_SECS must be an integer")?;
        builder = builder.fetch_timeout(Duration::from_secs(secs));
    }
    if let Ok(limit) = dotenvy::var("DISPLAY_LIMIT") {
        builder = builder.display_limit(limit.parse().context("DISPLAY_LIMIT must be an integer")?);
    }
    if let Ok(dir) = dotenvy::var("CHART_DIR") {
        builder = builder.chart_dir(dir);
    }
    if let Ok(port) = dotenvy::var("API_PORT") {
        builder = builder.api_port(port.parse().context("API_PORT must be an integer")?);
    }

    Ok(builder.build())
}

fn print_report(report: &Report) {
    println!("--- Wallet Gas Report ---");
    println!("Wallet Address: {}", report.wallet_address);

    if let Some(fee) = &report.l1_base_fee {
        println!(
            "Current Ethereum Suggested Base Fee: {} Gwei",
            fee.to_gwei_string()
        );
    }
    match &report.l2_gas_price {
        Some(price) => println!("Current L2 Gas Price: {} Gwei", price.to_gwei_string()),
        None => println!("Current L2 Gas Price: unavailable"),
    }
    match &report.fiat_quote {
        Some(quote) => println!(
            "Current ETH Price: ${} USD",
            quote.price_per_eth.with_scale_round(FIAT_SCALE, RoundingMode::HalfUp)
        ),
        None => println!("Current ETH Price: unavailable"),
    }

    println!("\nGas Spending Summary:");
    for aggregate in &report.aggregates {
        let fiat = aggregate
            .total_fiat
            .as_ref()
            .map(|v| format!("${v} USD"))
            .unwrap_or_else(|| "fiat unavailable".to_string());
        println!(
            "  {}: {} ETH ({})",
            aggregate.period, aggregate.total_eth, fiat
        );
    }

    if let Some(path) = &report.chart_path {
        println!("\nGas Spending Chart (Last 30 Days): {}", path.display());
    }

    if !report.recent_transactions.is_empty() {
        println!(
            "\nRecent transactions ({} shown):",
            report.recent_transactions.len()
        );
        for tx in &report.recent_transactions {
            println!(
                "  {}  {}  fee {} ETH{}",
                tx.timestamp.format("%Y-%m-%d %H:%M:%S"),
                tx.hash,
                tx.gas_fee.to_eth_string(),
                if tx.is_error { "  (reverted)" } else { "" }
            );
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("- {warning}");
        }
    }
}
