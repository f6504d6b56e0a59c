//! Data models shared by the API handlers and background tasks.
//!
//! # Key Types
//!
//! - [`ExchangeRate`] - The shared, lock-guarded BTC/USD rate written by the refresher task
//! - [`WalletBalance`] - A BTC amount paired with its USD value
//!
//! Upstream address and transaction documents are passed through as
//! `serde_json::Value` and never reshaped here.

pub mod exchange_rate;
pub use exchange_rate::ExchangeRate;

/// Number of satoshis in one bitcoin.
pub const SATOSHIS_PER_BTC: f64 = 100_000_000.0;

/// Converts an amount in satoshis to BTC.
pub fn sats_to_btc(sats: i64) -> f64 {
    sats as f64 / SATOSHIS_PER_BTC
}

/// A wallet balance in BTC and its USD value at a given exchange rate.
///
/// Serialized as the two-element array `[btc, usd]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalletBalance {
    pub btc: f64,
    pub usd: f64,
}

impl WalletBalance {
    pub fn at_rate(btc: f64, btc_usd_rate: f64) -> Self {
        Self {
            btc,
            usd: btc * btc_usd_rate,
        }
    }

    pub fn to_pair(self) -> [f64; 2] {
        [self.btc, self.usd]
    }
}
