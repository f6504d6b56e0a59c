use anyhow::Context;
use clap::Parser;
use log::info;

use btc_lookup::{cli::Cli, config::load_server_config, daemon::Daemon, log::init_logging};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    init_logging().context("Failed to initialize logging")?;

    let mut config = load_server_config(&cli.config_file)
        .with_context(|| format!("Failed to load configuration from {}", cli.config_file.display()))?;
    config.apply_args(&cli.server);

    info!(
        config_file:% = cli.config_file.display(),
        bind_address = &*config.bind_address(),
        rate_refresh_interval_secs = config.rate_refresh_interval_secs;
        "Starting btc-lookup"
    );

    Daemon::new(config).run().await
}
