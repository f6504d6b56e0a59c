// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use serde::Deserialize;

/// Response of the CoinDesk `currentprice/BTC.json` endpoint, reduced to the
/// fields we read.
///
/// ```json
/// { "bpi": { "USD": { "code": "USD", "rate": "64,000.5000", "rate_float": 64000.5 } } }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentPriceResponse {
    pub bpi: BitcoinPriceIndex,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BitcoinPriceIndex {
    #[serde(rename = "USD")]
    pub usd: CurrencyRate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyRate {
    pub rate_float: f64,
}
