//! Application configuration

mod app_config;

pub use app_config::{AppConfig, IdStrategy, LogFormat, LoggingConfig, ServerConfig, UsersConfig};
