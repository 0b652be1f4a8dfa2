//! Readers for configuration held in environment variables

use super::ConfigError;
use std::env;
use std::str::FromStr;

/// Parse `var` when it is set, otherwise hand back `default`.
/// Surrounding whitespace is ignored.
pub fn env_or<T: FromStr>(var: &str, default: T, expected: &str) -> Result<T, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::invalid_value(var, raw.as_str(), expected)),
        Err(_) => Ok(default),
    }
}

/// Raw string value of `var`, or `default` when unset
pub fn env_string_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VAR: &str = "USERLAB_TEST_ENV_READER";

    #[test]
    #[serial]
    fn test_env_or() {
        env::remove_var(VAR);
        assert_eq!(env_or(VAR, 7u16, "a number").unwrap(), 7);

        env::set_var(VAR, " 42 ");
        assert_eq!(env_or(VAR, 7u16, "a number").unwrap(), 42);

        env::set_var(VAR, "many");
        let result = env_or(VAR, 7u16, "a number");
        assert!(matches!(result, Err(ConfigError::InvalidValue { ref var, .. }) if var == VAR));
        env::remove_var(VAR);
    }

    #[test]
    #[serial]
    fn test_env_string_or() {
        env::remove_var(VAR);
        assert_eq!(env_string_or(VAR, "fallback"), "fallback");
        env::set_var(VAR, "set");
        assert_eq!(env_string_or(VAR, "fallback"), "set");
        env::remove_var(VAR);
    }
}
