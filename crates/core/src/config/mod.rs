//! Application configuration loaded from the process environment

pub mod app_config;
pub mod env;
pub mod error;

pub use app_config::{AppConfig, AppConfigTrait, Environment};
pub use env::{env_or, env_string_or};
pub use error::ConfigError;
