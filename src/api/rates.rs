use axum::{Json, extract::State};

use crate::models::ExchangeRate;

/// Returns the current BTC/USD exchange rate as a bare JSON number.
///
/// The value is `0` until the refresher has completed its first successful
/// fetch and may be up to one refresh interval old.
#[utoipa::path(
    get,
    path = "/btc_rate",
    responses(
        (status = 200, description = "USD price of one bitcoin", body = f64),
    )
)]
pub async fn api_get_btc_rate(State(exchange_rate): State<ExchangeRate>) -> Json<f64> {
    Json(exchange_rate.get().await)
}
