use std::path::PathBuf;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(name = "btc-lookup")]
#[command(about = "Bitcoin wallet, transaction and BTC/USD rate lookup server", long_about = None)]
pub struct Cli {
    #[arg(short, long, help = "Path to the configuration file", default_value = "data/config.toml")]
    pub config_file: PathBuf,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Optional overrides for values in the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    #[arg(long, help = "Address to bind the API server to")]
    pub listen_address: Option<String>,
    #[arg(short = 'p', long, help = "Port for the API server")]
    pub api_port: Option<u16>,
    #[arg(long, help = "Base URL of the blockchain explorer API")]
    pub blockchain_api_url: Option<String>,
    #[arg(long, help = "Base URL of the BTC price index API")]
    pub price_api_url: Option<String>,
    #[arg(long, help = "Seconds between exchange rate refreshes")]
    pub rate_refresh_interval_secs: Option<u64>,
    #[arg(long, help = "Timeout in seconds for each upstream request")]
    pub request_timeout_secs: Option<u64>,
    #[arg(long, help = "Retries on transient upstream failures")]
    pub max_retries: Option<u32>,
    #[arg(long, help = "SOCKS proxy for upstream requests, e.g. socks5h://localhost:8080")]
    pub socks_proxy: Option<String>,
}
