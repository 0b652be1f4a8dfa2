//! Health check endpoint implementation

use axum::Json;
use serde::{Deserialize, Serialize};
use userlab_core::{SERVICE_NAME, VERSION};

/// Health check response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: VERSION.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Default health check handler
pub async fn health_check_handler() -> Json<HealthStatus> {
    Json(HealthStatus::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_handler() {
        let response = tokio_test::block_on(health_check_handler());
        assert_eq!(response.0.status, "healthy");
        assert_eq!(response.0.service, "userlab");
        assert!(!response.0.timestamp.is_empty());
    }
}
