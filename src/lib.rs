pub mod address;
pub mod api;
pub mod cli;
pub mod config;
pub mod daemon;
pub mod http;
pub mod log;
pub mod models;
pub mod tasks;

pub use crate::address::{AddressKind, validate as validate_address};
pub use crate::api::{ApiDoc, AppState, create_router};
pub use crate::models::ExchangeRate;
