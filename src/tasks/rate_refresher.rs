use std::time::Duration;

use log::{info, warn};
use tokio::{
    sync::broadcast,
    task::JoinHandle,
    time::{MissedTickBehavior, interval},
};

use crate::{
    http::{HttpError, PriceFeedClient},
    models::ExchangeRate,
};

/// Keeps [`ExchangeRate`] current by polling the price feed on a fixed interval.
///
/// The first refresh happens immediately. A failed refresh is logged and the
/// previous rate is kept until the next tick.
#[derive(Debug)]
pub struct ExchangeRateRefresher {
    client: PriceFeedClient,
    rate: ExchangeRate,
    refresh_interval: Duration,
}

impl ExchangeRateRefresher {
    pub fn new(client: PriceFeedClient, rate: ExchangeRate, refresh_interval: Duration) -> Self {
        Self {
            client,
            rate,
            refresh_interval,
        }
    }

    /// Fetches the current price once and publishes it on success.
    pub async fn refresh_once(&self) -> Result<f64, HttpError> {
        let new_rate = self.client.fetch_btc_usd_rate().await?;
        self.rate.set(new_rate).await;
        Ok(new_rate)
    }

    pub fn run(self, mut shutdown_rx: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(interval_secs = self.refresh_interval.as_secs(); "Exchange rate refresher task started");
            let mut interval = interval(self.refresh_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        match self.refresh_once().await {
                            Ok(rate) => info!(rate = rate; "Got new BTC exchange rate"),
                            Err(e) => warn!(error:% = e; "Error fetching BTC exchange rate, keeping previous value"),
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        info!("Exchange rate refresher received shutdown signal. Exiting gracefully.");
                        break;
                    }
                }
            }
            info!("Exchange rate refresher has shut down.");
        })
    }
}
