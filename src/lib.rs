pub mod aggregate;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod report;
pub mod sources;
mod tracing;
pub mod types;
pub mod units;

pub use aggregate::{aggregate_period, bucket_by_day, daily_series, filter_by_window, sum_gas_fees};
pub use errors::{ChartError, ConversionError, FetchError, GastallyError, ValidationError};
pub use normalize::{normalize, normalize_all};
pub use report::ReportBuilder;
pub use sources::{
    BaseFeeSource, ChartRenderer, ExplorerClient, FiatQuoteSource, GasPriceSource,
    RpcGasPriceSource, SvgChartRenderer, TransactionSource,
};
pub use types::{
    DailyBucket, FiatQuote, NormalizedTransaction, Period, PeriodAggregate, RawTransactionRecord,
    Report, WalletAddress, WeiAmount,
};
