//! # userlab HTTP server
//!
//! Owns the bind address and the assembled router.

use super::lifecycle::{build_router, start_server};
use crate::{
    config::HttpConfig,
    errors::{HttpError, HttpResult},
    state::AppState,
};
use axum::Router;
use std::net::SocketAddr;
use tracing::info;
use userlab_core::{AppConfig, AppConfigTrait};

/// The HTTP server
///
/// # Example
///
/// ```rust,no_run
/// use userlab_core::AppConfig;
/// use userlab_http::{AppState, HttpConfig, Server};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let server = Server::new(&AppConfig::default(), HttpConfig::default(), AppState::new())?;
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct Server {
    addr: SocketAddr,
    router: Router,
}

impl Server {
    /// Validate both configs and assemble the router
    pub fn new(app_config: &AppConfig, config: HttpConfig, state: AppState) -> HttpResult<Self> {
        app_config.validate()?;
        config.validate()?;

        let addr = app_config
            .bind_address()
            .parse::<SocketAddr>()
            .map_err(|e| HttpError::config(format!("Invalid server address: {}", e)))?;

        Ok(Self {
            addr,
            router: build_router(state, &config),
        })
    }

    /// Address the server will bind to
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }


    /// Bind and serve until a shutdown signal arrives
    pub async fn run(self) -> HttpResult<()> {
        info!("Starting userlab HTTP server on {}", self.addr);
        start_server(self.addr, self.router).await?;
        info!("userlab HTTP server stopped gracefully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = Server::new(&AppConfig::default(), HttpConfig::default(), AppState::new());
        let server = server.unwrap();
        assert_eq!(server.addr().port(), 3000);
    }

    #[test]
    fn test_invalid_host_is_config_error() {
        let mut app_config = AppConfig::default();
        app_config.host = "not a host".to_string();

        let result = Server::new(&app_config, HttpConfig::default(), AppState::new());
        assert!(matches!(result, Err(HttpError::ConfigError { .. })));
    }

    #[test]
    fn test_invalid_http_config_is_rejected() {
        let http_config = HttpConfig {
            request_timeout_secs: 0,
            ..HttpConfig::default()
        };

        let result = Server::new(&AppConfig::default(), http_config, AppState::new());
        match result {
            Err(HttpError::ConfigError { message }) => {
                assert!(message.contains("HTTP_REQUEST_TIMEOUT"), "{}", message)
            }
            _ => panic!("expected a configuration error"),
        }
    }
}
