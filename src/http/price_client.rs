use log::debug;
use url::Url;

use super::error::HttpError;
use super::http_client::{ClientOptions, HttpClient};
use super::types::CurrentPriceResponse;

const CURRENT_PRICE_PATH: [&str; 4] = ["v1", "bpi", "currentprice", "BTC.json"];

/// Client for the CoinDesk Bitcoin Price Index.
#[derive(Debug)]
pub struct PriceFeedClient {
    http: HttpClient,
}

impl PriceFeedClient {
    pub fn new(base_url: Url, options: &ClientOptions) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::with_config(base_url, options)?,
        })
    }

    /// Fetches the current USD price of one bitcoin (`bpi.USD.rate_float`).
    pub async fn fetch_btc_usd_rate(&self) -> Result<f64, HttpError> {
        let response: CurrentPriceResponse = self.http.get_json(&CURRENT_PRICE_PATH).await?;
        debug!(base_url:% = self.http.base_url(), rate = response.bpi.usd.rate_float; "Fetched BTC price index");
        Ok(response.bpi.usd.rate_float)
    }
}
