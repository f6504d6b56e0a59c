use std::sync::Arc;

use axum::{Router, extract::FromRef, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{http::BlockchainClient, models::ExchangeRate};

mod error;
pub mod landing;
pub mod rates;
pub mod transactions;
pub mod types;
pub mod wallet;

pub use error::ApiError;

#[derive(Debug, Clone)]
pub struct AppState {
    pub blockchain: Arc<BlockchainClient>,
    pub exchange_rate: ExchangeRate,
}

impl AppState {
    pub fn new(blockchain: BlockchainClient, exchange_rate: ExchangeRate) -> Self {
        Self {
            blockchain: Arc::new(blockchain),
            exchange_rate,
        }
    }
}

impl FromRef<AppState> for ExchangeRate {
    fn from_ref(state: &AppState) -> Self {
        state.exchange_rate.clone()
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        rates::api_get_btc_rate,
        transactions::api_get_transaction,
        wallet::api_get_wallet,
        wallet::api_get_wallet_transactions,
        wallet::api_get_wallet_balance,
    ),
    components(
        schemas(
            error::ApiError,
            types::UpstreamDocument,
        )
    ),
    tags(
        (name = "btc-lookup", description = "Bitcoin wallet, transaction and exchange rate lookups"),
    )
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
        .route("/", get(landing::index))
        .route("/static/{*path}", get(landing::static_asset))
        .route("/btc_rate", get(rates::api_get_btc_rate))
        .route("/transaction/{hash}", get(transactions::api_get_transaction))
        .route("/wallet/{address}", get(wallet::api_get_wallet))
        .route("/wallet/transactions/{address}", get(wallet::api_get_wallet_transactions))
        .route("/wallet/balance/{address}", get(wallet::api_get_wallet_balance))
        .fallback(landing::not_found)
        .with_state(app_state)
}
