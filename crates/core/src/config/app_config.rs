use super::{env_or, env_string_or, ConfigError};
use std::fmt;
use std::str::FromStr;

/// Implemented by every configuration struct the binary loads at startup
pub trait AppConfigTrait: Sized {
    fn from_env() -> Result<Self, ConfigError>;

    fn validate(&self) -> Result<(), ConfigError>;
}

/// Deployment stage the process runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Testing,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Production => "production",
        }
    }

    pub fn is_testing(&self) -> bool {
        *self == Self::Testing
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "testing" | "test" => Ok(Self::Testing),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::invalid_value(
                ENVIRONMENT_VAR,
                s,
                "development, testing or production",
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Where the API listens and how loudly it logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: Environment,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            environment: Environment::Development,
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }

    pub fn development() -> Self {
        Self {
            log_level: "debug".to_string(),
            ..Self::new()
        }
    }

    /// Port 0 lets the OS choose, so parallel test servers never collide
    pub fn testing() -> Self {
        Self {
            environment: Environment::Testing,
            port: 0,
            log_level: "warn".to_string(),
            ..Self::new()
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            host: "0.0.0.0".to_string(),
            port: 8080,
            ..Self::new()
        }
    }

    /// `host:port`, ready for `SocketAddr` parsing
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfigTrait for AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::new();

        let config = Self {
            environment: env_or(ENVIRONMENT_VAR, defaults.environment, "an environment name")?,
            host: env_string_or(HOST_VAR, &defaults.host),
            port: env_or(PORT_VAR, defaults.port, "a port number between 0 and 65535")?,
            log_level: env_string_or(LOG_LEVEL_VAR, &defaults.log_level).to_lowercase(),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 && !self.environment.is_testing() {
            return Err(ConfigError::invalid_value(
                PORT_VAR,
                "0",
                "a non-zero port outside the testing environment",
            ));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::missing_required(
                HOST_VAR,
                "Unset it to listen on 127.0.0.1.",
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::invalid_value(
                LOG_LEVEL_VAR,
                self.log_level.as_str(),
                LOG_LEVELS.join(" | "),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for var in [ENVIRONMENT_VAR, PORT_VAR, HOST_VAR, LOG_LEVEL_VAR] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_port_zero_only_in_testing() {
        assert!(AppConfig::testing().validate().is_ok());

        let config = AppConfig {
            port: 0,
            ..AppConfig::development()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref var, .. }) if var == PORT_VAR
        ));
    }

    #[test]
    fn test_unknown_log_level() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..AppConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_blank_host() {
        let config = AppConfig {
            host: "  ".to_string(),
            ..AppConfig::new()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired { .. })
        ));
    }

    #[test]
    fn test_environment_names() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Testing ".parse::<Environment>().unwrap(), Environment::Testing);
        assert!("staging".parse::<Environment>().is_err());
        assert_eq!(Environment::default().to_string(), "development");
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(AppConfig::new().bind_address(), "127.0.0.1:3000");
        assert_eq!(AppConfig::production().bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        assert_eq!(AppConfig::from_env().unwrap(), AppConfig::new());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        env::set_var(ENVIRONMENT_VAR, "production");
        env::set_var(PORT_VAR, "9090");
        env::set_var(HOST_VAR, "0.0.0.0");
        env::set_var(LOG_LEVEL_VAR, "WARN");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.log_level, "warn");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_port() {
        clear_env();
        env::set_var(PORT_VAR, "not-a-port");
        let result = AppConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { ref var, .. }) if var == PORT_VAR));
        clear_env();
    }
}
