// Copyright 2025 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use std::time::Duration;

use log::debug;
use serde::de::DeserializeOwned;
use url::Url;

use super::error::HttpError;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("btc-lookup/", env!("CARGO_PKG_VERSION"));

/// Transport settings shared by every upstream client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Upper bound for a single request, including connect and body read.
    pub timeout: Duration,
    /// Extra attempts on transient failures. Zero means a single attempt.
    pub max_retries: u32,
    /// Optional SOCKS proxy URL (e.g. `socks5h://localhost:8080`) applied to all requests.
    pub socks_proxy: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: 0,
            socks_proxy: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct HttpClient {
    base_url: Url,
    client: reqwest_middleware::ClientWithMiddleware,
}

impl HttpClient {
    pub fn with_config(base_url: Url, options: &ClientOptions) -> Result<Self, HttpError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpError::InvalidBaseUrl(base_url.to_string()));
        }

        let retry_policy =
            reqwest_retry::policies::ExponentialBackoff::builder().build_with_max_retries(options.max_retries);

        let mut builder = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT);
        if let Some(proxy) = &options.socks_proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        let inner_client = builder.build()?;

        let client = reqwest_middleware::ClientBuilder::new(inner_client)
            .with(reqwest_retry::RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base_url}/{segments...}`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, HttpError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| HttpError::InvalidBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get(&self, segments: &[&str]) -> Result<reqwest::Response, HttpError> {
        let url = self.endpoint(segments)?;
        debug!(url:% = url; "Sending upstream request");

        let resp = self.client.get(url).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".into());
            return Err(HttpError::ServerError { status, body });
        }

        Ok(resp)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, HttpError> {
        let body = self.get(segments).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn get_text(&self, segments: &[&str]) -> Result<String, HttpError> {
        Ok(self.get(segments).await?.text().await?)
    }
}
