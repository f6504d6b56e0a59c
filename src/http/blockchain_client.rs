//! Client for the blockchain.info explorer API.
//!
//! The three lookups report failures differently:
//!
//! | Operation | Invalid input | Upstream failure |
//! |---|---|---|
//! | [`get_address_info`](BlockchainClient::get_address_info) | `Ok(None)`, no request sent | `Err(HttpError)` |
//! | [`get_transaction_info`](BlockchainClient::get_transaction_info) | n/a | `None`, logged |
//! | [`get_wallet_balance`](BlockchainClient::get_wallet_balance) | n/a | `None`, logged |
//!
//! Keeping validation and transport failures apart for address info lets the
//! API answer `null` for a malformed address while still reporting a broken
//! upstream as an error.

use log::{info, warn};
use serde_json::Value as JsonValue;
use url::Url;

use super::error::HttpError;
use super::http_client::{ClientOptions, HttpClient};
use crate::address;
use crate::log::mask_address;
use crate::models::sats_to_btc;

#[derive(Debug)]
pub struct BlockchainClient {
    http: HttpClient,
}

impl BlockchainClient {
    pub fn new(base_url: Url, options: &ClientOptions) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::with_config(base_url, options)?,
        })
    }

    /// Fetches `rawaddr/{address}`.
    ///
    /// Returns `Ok(None)` without contacting the upstream if the address fails
    /// [`address::validate`].
    pub async fn get_address_info(&self, address: &str) -> Result<Option<JsonValue>, HttpError> {
        if !address::validate(address) {
            return Ok(None);
        }

        info!(address:% = mask_address(address); "Requesting address info");
        let info: JsonValue = self.http.get_json(&["rawaddr", address]).await?;
        Ok(Some(info))
    }

    /// Fetches `rawtx/{hash}`.
    pub async fn get_transaction_info(&self, tx_hash: &str) -> Option<JsonValue> {
        info!(tx_hash:% = mask_address(tx_hash); "Requesting transaction info");
        match self.http.get_json::<JsonValue>(&["rawtx", tx_hash]).await {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(tx_hash:% = mask_address(tx_hash), error:% = e; "Error fetching transaction data");
                None
            },
        }
    }

    /// Fetches `q/addressbalance/{address}` and converts the satoshi amount to BTC.
    pub async fn get_wallet_balance(&self, address: &str) -> Option<f64> {
        info!(address:% = mask_address(address); "Requesting wallet balance");
        match self.fetch_balance_sats(address).await {
            Ok(sats) => Some(sats_to_btc(sats)),
            Err(e) => {
                warn!(address:% = mask_address(address), error:% = e; "Error fetching wallet balance");
                None
            },
        }
    }

    async fn fetch_balance_sats(&self, address: &str) -> Result<i64, HttpError> {
        let body = self.http.get_text(&["q", "addressbalance", address]).await?;
        body.trim()
            .parse::<i64>()
            .map_err(|_| HttpError::InvalidBalance(body.to_string()))
    }
}
