//! Service configuration.
//!
//! Settings are layered, each source overriding the previous one:
//!
//! 1. [`ServerConfig::default`], mirrored by the embedded `config/config.toml`
//! 2. the TOML file passed with `--config-file` (written from the embedded default if missing)
//! 3. `BTC_LOOKUP_SERVER__<KEY>` environment variables
//! 4. command line flags, applied with [`ServerConfig::apply_args`]

mod defaults;
mod loader;

pub use defaults::ServerConfig;
pub use loader::{get_default_config, load_configuration, load_server_config, write_config_to};
