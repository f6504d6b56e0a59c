use std::{fs, fs::File, io::Write, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;

use super::ServerConfig;

const ENV_PREFIX: &str = "BTC_LOOKUP";

pub fn get_default_config() -> &'static str {
    include_str!("../../config/config.toml")
}

pub fn load_configuration(path: &Path) -> Result<Config> {
    if !path.exists() {
        let sources = get_default_config();
        write_config_to(path, sources).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    Config::builder()
        .add_source(config::File::from_str(get_default_config(), config::FileFormat::Toml))
        .add_source(config::File::with_name(filename))
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_").separator("__"))
        .build()
        .context("Could not build configuration")
}

pub fn load_server_config(path: &Path) -> Result<ServerConfig> {
    let cfg = load_configuration(path)?;
    let server = match cfg.get::<ServerConfig>(ServerConfig::main_key_prefix()) {
        Ok(server) => server,
        Err(config::ConfigError::NotFound(_)) => ServerConfig::default(),
        Err(e) => return Err(e).context("Could not read server configuration"),
    };
    server.validate().context("Invalid server configuration")?;
    Ok(server)
}

pub fn write_config_to(path: &Path, source: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create parent directories")?;
    };

    let mut file = File::create(path).context("Failed to create config file")?;
    file.write_all(source.as_bytes())
        .context("Failed to write config content")?;
    file.write_all(b"\n").context("Failed to write newline")?;
    Ok(())
}
