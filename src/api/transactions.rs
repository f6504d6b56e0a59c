use axum::{
    Json,
    extract::{Path, State},
};

use super::{AppState, error::ApiError, types::UpstreamDocument};

/// Returns the raw blockchain.info document for a transaction hash.
///
/// # Errors
///
/// - [`ApiError::TransactionUnavailable`]: the upstream lookup failed or returned
///   something other than JSON
#[utoipa::path(
    get,
    path = "/transaction/{hash}",
    responses(
        (status = 200, description = "Transaction details from blockchain.info", body = UpstreamDocument),
        (status = 500, description = "Transaction lookup failed", body = ApiError),
    ),
    params(
        ("hash" = String, Path, description = "Transaction hash"),
    )
)]
pub async fn api_get_transaction(
    State(app_state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<UpstreamDocument>, ApiError> {
    let info = app_state
        .blockchain
        .get_transaction_info(&hash)
        .await
        .ok_or(ApiError::TransactionUnavailable(hash))?;

    Ok(Json(UpstreamDocument(info)))
}
