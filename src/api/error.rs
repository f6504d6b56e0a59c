use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::http::HttpError;

/// Failures surfaced by the API. Every variant renders as `{"error": <message>}`.
#[derive(Debug, Error, ToSchema)]
pub enum ApiError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    #[error("Invalid bitcoin address: {0}")]
    InvalidAddress(String),
    #[error("Unexpected upstream response: {0}")]
    UnexpectedResponse(String),
    #[error("Transaction unavailable: {0}")]
    TransactionUnavailable(String),
    #[error("Balance unavailable for address: {0}")]
    BalanceUnavailable(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
