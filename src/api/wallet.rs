//! Wallet endpoint handlers.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/wallet/{address}` | Raw address info, `null` for a malformed address |
//! | GET | `/wallet/transactions/{address}` | Every transaction of the address, stamped with the current rate |
//! | GET | `/wallet/balance/{address}` | `[btc, usd]` balance pair |
//!
//! ```bash
//! curl http://localhost:5000/wallet/balance/1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa
//! ```

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value as JsonValue, json};

use super::{AppState, error::ApiError, types::UpstreamDocument};
use crate::models::WalletBalance;

/// Field added to every transaction returned by `/wallet/transactions/{address}`.
pub const RATE_FIELD: &str = "btc_to_usd_rate";

/// Returns the blockchain.info address document.
///
/// A malformed address is not an error: the response is `null` with status 200.
#[utoipa::path(
    get,
    path = "/wallet/{address}",
    responses(
        (status = 200, description = "Address info, or null if the address is malformed", body = UpstreamDocument),
        (status = 500, description = "Upstream lookup failed", body = ApiError),
    ),
    params(
        ("address" = String, Path, description = "Bitcoin address (legacy, script or segwit)"),
    )
)]
pub async fn api_get_wallet(
    State(app_state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Option<UpstreamDocument>>, ApiError> {
    let info = app_state.blockchain.get_address_info(&address).await?;
    Ok(Json(info.map(UpstreamDocument)))
}

/// Returns every transaction listed in the address info, in upstream order, each
/// with a `btc_to_usd_rate` field holding the rate read once for this request.
///
/// # Errors
///
/// The whole request fails if the address is malformed, the address lookup
/// fails, the document has no `txs` list, or any single transaction lookup fails.
#[utoipa::path(
    get,
    path = "/wallet/transactions/{address}",
    responses(
        (status = 200, description = "Transactions stamped with the BTC/USD rate", body = Vec<UpstreamDocument>),
        (status = 500, description = "Address or transaction lookup failed", body = ApiError),
    ),
    params(
        ("address" = String, Path, description = "Bitcoin address (legacy, script or segwit)"),
    )
)]
pub async fn api_get_wallet_transactions(
    State(app_state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<UpstreamDocument>>, ApiError> {
    let address_info = app_state
        .blockchain
        .get_address_info(&address)
        .await?
        .ok_or_else(|| ApiError::InvalidAddress(address.clone()))?;

    let btc_to_usd_rate = app_state.exchange_rate.get().await;
    let hashes = transaction_hashes(&address_info)?;

    let mut transactions = Vec::with_capacity(hashes.len());
    for hash in hashes {
        let tx_info = app_state
            .blockchain
            .get_transaction_info(&hash)
            .await
            .ok_or_else(|| ApiError::TransactionUnavailable(hash.clone()))?;
        transactions.push(UpstreamDocument(stamp_rate(tx_info, &hash, btc_to_usd_rate)?));
    }

    Ok(Json(transactions))
}

/// Returns the address balance as `[btc, usd]`.
///
/// # Errors
///
/// - [`ApiError::BalanceUnavailable`]: the balance lookup failed, so there is no
///   amount to price
#[utoipa::path(
    get,
    path = "/wallet/balance/{address}",
    responses(
        (status = 200, description = "Balance in BTC and its USD value", body = [f64]),
        (status = 500, description = "Balance lookup failed", body = ApiError),
    ),
    params(
        ("address" = String, Path, description = "Bitcoin address"),
    )
)]
pub async fn api_get_wallet_balance(
    State(app_state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<[f64; 2]>, ApiError> {
    let btc_balance = app_state
        .blockchain
        .get_wallet_balance(&address)
        .await
        .ok_or_else(|| ApiError::BalanceUnavailable(address.clone()))?;

    let btc_to_usd_rate = app_state.exchange_rate.get().await;
    Ok(Json(WalletBalance::at_rate(btc_balance, btc_to_usd_rate).to_pair()))
}

fn transaction_hashes(address_info: &JsonValue) -> Result<Vec<String>, ApiError> {
    let txs = address_info
        .get("txs")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| ApiError::UnexpectedResponse("address info has no 'txs' list".to_string()))?;

    txs.iter()
        .enumerate()
        .map(|(i, tx)| {
            tx.get("hash")
                .and_then(JsonValue::as_str)
                .map(str::to_string)
                .ok_or_else(|| ApiError::UnexpectedResponse(format!("txs[{}] has no 'hash'", i)))
        })
        .collect()
}

fn stamp_rate(mut tx_info: JsonValue, hash: &str, btc_to_usd_rate: f64) -> Result<JsonValue, ApiError> {
    tx_info
        .as_object_mut()
        .ok_or_else(|| ApiError::UnexpectedResponse(format!("transaction {} is not an object", hash)))?
        .insert(RATE_FIELD.to_string(), json!(btc_to_usd_rate));
    Ok(tx_info)
}
