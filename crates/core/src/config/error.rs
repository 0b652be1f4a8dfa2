use thiserror::Error;

/// Why a configuration could not be loaded. Variables are named by the
/// environment key that carried them so the message points at the fix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be set. {hint}")]
    MissingRequired { var: String, hint: String },

    #[error("{var}={value:?} is not accepted, expected {expected}")]
    InvalidValue {
        var: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    pub fn missing_required(var: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingRequired {
            var: var.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_value(
        var: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            var: var.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_variable() {
        let err = ConfigError::invalid_value("PORT", "eighty", "a port number");
        assert_eq!(
            err.to_string(),
            "PORT=\"eighty\" is not accepted, expected a port number"
        );

        let err = ConfigError::missing_required("HOST", "Unset it to listen on 127.0.0.1.");
        assert_eq!(err.to_string(), "HOST must be set. Unset it to listen on 127.0.0.1.");
    }
}
