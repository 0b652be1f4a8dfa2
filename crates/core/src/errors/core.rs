use thiserror::Error;

/// Result type for domain operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Core error type for the userlab domain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Lock poisoning on a shared resource
    pub(crate) fn lock_poisoned(resource: &str) -> Self {
        Self::Internal {
            message: format!("lock on {} was poisoned", resource),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Error code for consistent API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "RESOURCE_NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let error = CoreError::validation("Name is required.");
        assert_eq!(error.to_string(), "Name is required.");
        assert!(error.is_validation());
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_not_found() {
        let error = CoreError::not_found("user 7");
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "user 7 not found");
    }

    #[test]
    fn test_lock_poisoned_is_internal() {
        let error = CoreError::lock_poisoned("users");
        assert_eq!(error.error_code(), "INTERNAL_ERROR");
        assert!(!error.is_validation());
    }
}
