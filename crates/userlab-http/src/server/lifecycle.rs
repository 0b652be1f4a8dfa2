//! Server lifecycle management - router assembly, startup, and signal handling

use crate::{
    config::HttpConfig,
    errors::{HttpError, HttpResult},
    middleware::with_error_handling,
    routes::api_router,
    server::health::health_check_handler,
    state::AppState,
};
use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, warn};

/// Assemble the full application: every snapshot route, the health check,
/// the global error handling and the transport limits from `config`.
pub fn build_router(state: AppState, config: &HttpConfig) -> Router {
    let router = api_router().route(&config.health_check_path, get(health_check_handler));

    let router = with_error_handling(router).layer(
        ServiceBuilder::new()
            .layer(RequestBodyLimitLayer::new(config.max_request_size))
            .layer(TimeoutLayer::new(config.request_timeout())),
    );

    let router = if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router.with_state(state)
}

/// Start the server with graceful shutdown
pub async fn start_server(addr: SocketAddr, router: Router) -> HttpResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::startup(format!("Failed to bind to {}: {}", addr, e)))?;

    let local_addr = listener.local_addr()?;
    info!("Server listening on {}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            warn!("Received terminate signal, shutting down gracefully");
        },
    }
}
