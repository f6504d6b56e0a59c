//! Background tasks that run alongside the API server.
//!
//! # Available Tasks
//!
//! - [`rate_refresher::ExchangeRateRefresher`] - Periodically refreshes the shared BTC/USD rate
//!
//! # Usage
//!
//! Tasks are started by the daemon and run in the background until a shutdown
//! signal is received.

pub mod rate_refresher;
