// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for report generation
//!
//! Controls the external endpoints, the per-fetch deadline, and the report
//! presentation bounds. Use [`TrackerConfigBuilder`] for a fluent API.
//!
//! # Example
//!
//! ```rust
//! use gastally::config::TrackerConfigBuilder;
//! use std::time::Duration;
//!
//! let config = TrackerConfigBuilder::with_defaults()
//!     .explorer_api_key("KEY")
//!     .rpc_url("https://mainnet.base.org")
//!     .fetch_timeout(Duration::from_secs(10))
//!     .build();
//! assert_eq!(config.display_limit, 20);
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Default explorer API endpoint (Basescan)
pub const DEFAULT_EXPLORER_URL: &str = "https://api.basescan.org/api";

/// Default L2 RPC endpoint
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

/// Default L1 explorer endpoint, used for the gas-oracle base fee
pub const DEFAULT_L1_EXPLORER_URL: &str = "https://api.etherscan.io/api";

/// Deadline applied to each external fetch. A fetch that misses it degrades
/// to "unavailable" for that piece of data; it never aborts the report.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// How many recent transactions a report carries for display
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

/// Where rendered charts are written
pub const DEFAULT_CHART_DIR: &str = "static/charts";

/// Default port for the JSON API
pub const DEFAULT_API_PORT: u16 = 3000;

/// Configuration for report generation.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Explorer API base URL
    pub explorer_url: String,

    /// Explorer API key
    pub explorer_api_key: String,

    /// L2 RPC URL used for the network gas-price snapshot
    pub rpc_url: String,

    /// L1 explorer API base URL, for the gas-oracle base fee
    pub l1_explorer_url: String,

    /// L1 explorer API key. `None` disables the base-fee fetch entirely.
    pub l1_explorer_api_key: Option<String>,

    /// Per-fetch deadline
    pub fetch_timeout: Duration,

    /// Upper bound on the recent-transaction display list
    pub display_limit: usize,

    /// Directory chart files are written into
    pub chart_dir: PathBuf,

    /// Port the JSON API binds to
    pub api_port: u16,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            explorer_url: DEFAULT_EXPLORER_URL.to_string(),
            explorer_api_key: String::new(),
            rpc_url: DEFAULT_RPC_URL.to_string(),
            l1_explorer_url: DEFAULT_L1_EXPLORER_URL.to_string(),
            l1_explorer_api_key: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            api_port: DEFAULT_API_PORT,
        }
    }
}

/// Fluent builder for [`TrackerConfig`].
#[derive(Debug, Clone, Default)]
pub struct TrackerConfigBuilder {
    config: TrackerConfig,
}

impl TrackerConfigBuilder {
    /// Start from the default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the explorer API base URL.
    pub fn explorer_url(mut self, url: impl Into<String>) -> Self {
        self.config.explorer_url = url.into();
        self
    }

    /// Set the explorer API key.
    pub fn explorer_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.explorer_api_key = key.into();
        self
    }

    /// Set the L2 RPC URL.
    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.config.rpc_url = url.into();
        self
    }

    /// Set the L1 explorer API base URL.
    pub fn l1_explorer_url(mut self, url: impl Into<String>) -> Self {
        self.config.l1_explorer_url = url.into();
        self
    }

    /// Set the L1 explorer API key, enabling the base-fee fetch.
    pub fn l1_explorer_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.l1_explorer_api_key = Some(key.into());
        self
    }

    /// Set the per-fetch deadline.
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.config.fetch_timeout = timeout;
        self
    }

    /// Set the recent-transaction display bound.
    pub fn display_limit(mut self, limit: usize) -> Self {
        self.config.display_limit = limit;
        self
    }

    /// Set the chart output directory.
    pub fn chart_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.chart_dir = dir.into();
        self
    }

    /// Set the JSON API port.
    pub fn api_port(mut self, port: u16) -> Self {
        self.config.api_port = port;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> TrackerConfig {
        self.config
    }
}
