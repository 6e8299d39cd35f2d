mod app_config;
mod catalog_config;

pub use app_config::{AppConfig, DatabaseConfig, ServerConfig};
pub use catalog_config::{CatalogConfig, NameMatch, SerialMatch};
