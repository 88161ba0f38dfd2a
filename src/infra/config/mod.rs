mod app_config;
mod file_config;
mod loader;

pub use app_config::{AppConfig, BackendConfig, ContactConfig, LogConfig};
pub use loader::load;
