use std::time::Duration;

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::cli::ServerArgs;
use crate::http::ClientOptions;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_address: String,
    pub api_port: u16,
    pub blockchain_api_url: String,
    pub price_api_url: String,
    pub rate_refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
    pub socks_proxy: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0".to_string(),
            api_port: 5000,
            blockchain_api_url: "https://blockchain.info/".to_string(),
            price_api_url: "https://api.coindesk.com/".to_string(),
            rate_refresh_interval_secs: 180,
            request_timeout_secs: 30,
            max_retries: 0,
            socks_proxy: None,
        }
    }
}

impl ServerConfig {
    pub fn main_key_prefix() -> &'static str {
        "server"
    }

    pub fn apply_args(&mut self, args: &ServerArgs) {
        if let Some(listen_address) = &args.listen_address {
            self.listen_address = listen_address.clone();
        }
        if let Some(api_port) = args.api_port {
            self.api_port = api_port;
        }
        if let Some(url) = &args.blockchain_api_url {
            self.blockchain_api_url = url.clone();
        }
        if let Some(url) = &args.price_api_url {
            self.price_api_url = url.clone();
        }
        if let Some(secs) = args.rate_refresh_interval_secs {
            self.rate_refresh_interval_secs = secs;
        }
        if let Some(secs) = args.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(max_retries) = args.max_retries {
            self.max_retries = max_retries;
        }
        if let Some(proxy) = &args.socks_proxy {
            self.socks_proxy = Some(proxy.clone());
        }
    }

    /// Rejects values the daemon cannot run with.
    ///
    /// A zero refresh interval would panic the rate refresher's timer, and a
    /// zero request timeout fails every upstream call before it is sent.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rate_refresh_interval_secs > 0,
            "rate_refresh_interval_secs must be greater than zero"
        );
        ensure!(self.request_timeout_secs > 0, "request_timeout_secs must be greater than zero");
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.listen_address, self.api_port)
    }

    pub fn rate_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.rate_refresh_interval_secs)
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_retries: self.max_retries,
            socks_proxy: self.socks_proxy.clone(),
        }
    }
}
