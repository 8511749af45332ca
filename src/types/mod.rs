// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Core domain types: wei amounts, transaction records, report aggregates.

pub mod report;
pub mod transaction;
pub mod wei;

pub use report::{DailyBucket, FiatQuote, Period, PeriodAggregate, Report};
pub use transaction::{NormalizedTransaction, RawTransactionRecord, WalletAddress};
pub use wei::WeiAmount;
