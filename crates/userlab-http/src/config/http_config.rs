//! HTTP server configuration
//!
//! Loaded from `HTTP_*` environment variables on top of [`HttpDefaults`].

use super::defaults::HttpDefaults;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use userlab_core::{env_or, env_string_or, AppConfigTrait, ConfigError};

/// Knobs for the tower layers wrapped around the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Requests running longer than this are cut off
    pub request_timeout_secs: u64,
    /// Body size limit in bytes
    pub max_request_size: usize,
    /// Emit a span per request
    pub enable_tracing: bool,
    pub health_check_path: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: HttpDefaults::REQUEST_TIMEOUT_SECS,
            max_request_size: HttpDefaults::MAX_REQUEST_SIZE,
            enable_tracing: HttpDefaults::ENABLE_TRACING,
            health_check_path: HttpDefaults::HEALTH_CHECK_PATH.to_string(),
        }
    }
}

const REQUEST_TIMEOUT_VAR: &str = "HTTP_REQUEST_TIMEOUT";
const MAX_REQUEST_SIZE_VAR: &str = "HTTP_MAX_REQUEST_SIZE";
const ENABLE_TRACING_VAR: &str = "HTTP_ENABLE_TRACING";
const HEALTH_CHECK_PATH_VAR: &str = "HTTP_HEALTH_CHECK_PATH";

impl AppConfigTrait for HttpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            request_timeout_secs: env_or(
                REQUEST_TIMEOUT_VAR,
                HttpDefaults::REQUEST_TIMEOUT_SECS,
                "whole seconds",
            )?,
            max_request_size: env_or(
                MAX_REQUEST_SIZE_VAR,
                HttpDefaults::MAX_REQUEST_SIZE,
                "a size in bytes",
            )?,
            enable_tracing: env_or(
                ENABLE_TRACING_VAR,
                HttpDefaults::ENABLE_TRACING,
                "true or false",
            )?,
            health_check_path: env_string_or(
                HEALTH_CHECK_PATH_VAR,
                HttpDefaults::HEALTH_CHECK_PATH,
            ),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::invalid_value(
                REQUEST_TIMEOUT_VAR,
                "0",
                "at least one second",
            ));
        }

        if self.max_request_size == 0 {
            return Err(ConfigError::invalid_value(
                MAX_REQUEST_SIZE_VAR,
                "0",
                "at least one byte",
            ));
        }

        if !self.health_check_path.starts_with('/') {
            return Err(ConfigError::invalid_value(
                HEALTH_CHECK_PATH_VAR,
                self.health_check_path.as_str(),
                "an absolute path such as /health",
            ));
        }

        Ok(())
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [
            REQUEST_TIMEOUT_VAR,
            MAX_REQUEST_SIZE_VAR,
            ENABLE_TRACING_VAR,
            HEALTH_CHECK_PATH_VAR,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = HttpConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.health_check_path, "/health");
    }

    #[test]
    fn test_validation_failures() {
        let cases = [
            (
                HttpConfig {
                    request_timeout_secs: 0,
                    ..HttpConfig::default()
                },
                REQUEST_TIMEOUT_VAR,
            ),
            (
                HttpConfig {
                    max_request_size: 0,
                    ..HttpConfig::default()
                },
                MAX_REQUEST_SIZE_VAR,
            ),
            (
                HttpConfig {
                    health_check_path: "health".to_string(),
                    ..HttpConfig::default()
                },
                HEALTH_CHECK_PATH_VAR,
            ),
        ];

        for (config, var) in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidValue { var: ref v, .. }) if v == var),
                "{}",
                var
            );
        }
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var(REQUEST_TIMEOUT_VAR, "5");
        env::set_var(ENABLE_TRACING_VAR, "false");
        env::set_var(HEALTH_CHECK_PATH_VAR, "/status");

        let config = HttpConfig::from_env().unwrap();
        assert_eq!(config.request_timeout_secs, 5);
        assert!(!config.enable_tracing);
        assert_eq!(config.health_check_path, "/status");
        assert_eq!(config.max_request_size, HttpDefaults::MAX_REQUEST_SIZE);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_number() {
        clear_env();
        env::set_var(MAX_REQUEST_SIZE_VAR, "lots");
        let result = HttpConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        clear_env();
    }
}
