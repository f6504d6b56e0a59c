//! Long-running server process.
//!
//! [`Daemon`] wires the configured upstream clients, the shared exchange rate,
//! the background [`ExchangeRateRefresher`] and the HTTP API together, and runs
//! them until Ctrl+C.
//!
//! # Architecture
//!
//! 1. **Rate refresher**: polls the price feed and publishes to [`ExchangeRate`]
//! 2. **API server**: axum router serving the wallet/transaction/rate endpoints
//! 3. **Signal listener**: turns Ctrl+C into a broadcast shutdown signal
//!
//! All components listen on the same broadcast channel and terminate gracefully.

use anyhow::{Context, Result, anyhow};
use log::{error, info};
use tokio::{signal, sync::broadcast};
use url::Url;

use crate::{
    api::{self, AppState},
    config::ServerConfig,
    http::{BlockchainClient, PriceFeedClient},
    models::ExchangeRate,
    tasks::rate_refresher::ExchangeRateRefresher,
};

pub struct Daemon {
    config: ServerConfig,
}

impl Daemon {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Builds the API state and the rate refresher from the configuration.
    ///
    /// Both share one [`ExchangeRate`] cell, initialised to `0.0`.
    pub fn build_components(&self) -> Result<(AppState, ExchangeRateRefresher)> {
        self.config.validate().context("Invalid server configuration")?;

        let options = self.config.client_options();
        if let Some(proxy) = &options.socks_proxy {
            info!(proxy = proxy.as_str(); "Routing upstream requests through SOCKS proxy");
        }

        let blockchain_url = Url::parse(&self.config.blockchain_api_url)
            .with_context(|| format!("Invalid blockchain API URL '{}'", self.config.blockchain_api_url))?;
        let price_url = Url::parse(&self.config.price_api_url)
            .with_context(|| format!("Invalid price API URL '{}'", self.config.price_api_url))?;

        let blockchain = BlockchainClient::new(blockchain_url, &options).context("Failed to build blockchain client")?;
        let price_feed = PriceFeedClient::new(price_url, &options).context("Failed to build price feed client")?;

        let exchange_rate = ExchangeRate::default();
        let refresher = ExchangeRateRefresher::new(price_feed, exchange_rate.clone(), self.config.rate_refresh_interval());

        Ok((AppState::new(blockchain, exchange_rate), refresher))
    }

    /// Runs the server until a shutdown signal is received.
    ///
    /// # Errors
    ///
    /// Fails on invalid upstream configuration, if the listener cannot bind, or
    /// if a task panics during shutdown.
    pub async fn run(&self) -> Result<()> {
        info!("Daemon started. Press Ctrl+C to stop.");

        let (shutdown_tx, _) = broadcast::channel(1);
        let (app_state, refresher) = self.build_components()?;

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind API server to {}", addr))?;
        info!(address = &*addr; "API server listening");

        let refresher_handle = refresher.run(shutdown_tx.subscribe());

        let router = api::create_router(app_state);
        let mut shutdown_rx_api = shutdown_tx.subscribe();
        let api_server_handle = tokio::spawn(async move {
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_rx_api.recv().await.ok();
                })
                .await;
            if let Err(e) = result {
                error!(error:% = e; "API server terminated with an error");
            }
        });

        let shutdown_tx_clone = shutdown_tx.clone();
        let ctrlc_handle = tokio::spawn(async move {
            if let Err(e) = signal::ctrl_c().await {
                error!(error:% = e; "Failed to listen for ctrl_c");
            }
            info!("Received shutdown signal, stopping all tasks...");
            let _ = shutdown_tx_clone.send(());
        });

        tokio::try_join!(api_server_handle, refresher_handle, ctrlc_handle)
            .map_err(|e| anyhow!("A task panicked during shutdown: {}", e))?;

        info!("Daemon stopped gracefully.");
        Ok(())
    }
}
