//! Outbound HTTP clients for the upstream APIs.
//!
//! - [`BlockchainClient`] - address, transaction and balance lookups against blockchain.info
//! - [`PriceFeedClient`] - BTC/USD price index from CoinDesk
//! - [`ClientOptions`] - timeout, retry count and optional SOCKS proxy shared by both
//! - [`HttpError`] - failure modes of an upstream call
//!
//! Both clients wrap the same internal client: `reqwest` behind
//! `reqwest-middleware`, with a retry policy built from
//! [`ClientOptions::max_retries`] (zero by default, so each lookup is a single
//! request) and a request timeout.
//!
//! # Example
//!
//! ```rust,no_run
//! use url::Url;
//! use btc_lookup::http::{BlockchainClient, ClientOptions};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let client = BlockchainClient::new(Url::parse("https://blockchain.info/")?, &ClientOptions::default())?;
//! if let Some(btc) = client.get_wallet_balance("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").await {
//!     println!("Balance: {} BTC", btc);
//! }
//! # Ok(())
//! # }
//! ```

mod blockchain_client;
mod error;
mod http_client;
mod price_client;
mod types;

pub use blockchain_client::BlockchainClient;
pub use error::HttpError;
pub use http_client::ClientOptions;
pub use price_client::PriceFeedClient;
pub use types::{BitcoinPriceIndex, CurrencyRate, CurrentPriceResponse};
