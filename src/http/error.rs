//! Error types for upstream HTTP operations.
//!
//! Every outbound call made by [`BlockchainClient`](super::BlockchainClient) and
//! [`PriceFeedClient`](super::PriceFeedClient) reports failures through
//! [`HttpError`].

use thiserror::Error;

/// Errors that can occur while talking to an upstream API.
///
/// The variants fall into two groups:
///
/// - **Transport failures**: [`RequestFailed`](HttpError::RequestFailed),
///   [`MiddlewareError`](HttpError::MiddlewareError) and
///   [`ServerError`](HttpError::ServerError)
/// - **Parse failures**: [`JsonError`](HttpError::JsonError) and
///   [`InvalidBalance`](HttpError::InvalidBalance)
///
/// [`UrlError`](HttpError::UrlError) and [`InvalidBaseUrl`](HttpError::InvalidBaseUrl)
/// indicate a misconfigured upstream URL.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The HTTP request failed due to a network or connection error.
    ///
    /// This covers refused connections, DNS failures, TLS errors, proxy
    /// handshake errors and the request timeout.
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// An error occurred in the HTTP middleware layer.
    ///
    /// When retries are enabled this may mean all attempts were exhausted.
    #[error("Middleware error: {0}")]
    MiddlewareError(#[from] reqwest_middleware::Error),

    /// The upstream returned a non-success HTTP status code.
    #[error("Server error {status}: {body}")]
    ServerError {
        /// The HTTP status code returned by the upstream.
        status: reqwest::StatusCode,
        /// The response body, which may contain error details.
        body: String,
    },

    /// Failed to parse or join a URL.
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// The configured base URL cannot have path segments appended
    /// (e.g. `mailto:` or `data:` URLs).
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The response body was not the JSON shape we expected.
    #[error("JSON deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A plain-text balance response was not an integer amount of satoshis.
    #[error("Invalid balance response: {0:?}")]
    InvalidBalance(String),
}
