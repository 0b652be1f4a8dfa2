//! # userlab-http
//!
//! HTTP layer of the userlab tutorial API.
//!
//! - one route table built from every tutorial snapshot (`/api1` .. `/api10`)
//! - JSON, path and query extractors that reject through [`HttpError`]
//! - a global error handler shared by all routes
//! - configuration, structured logging and graceful shutdown

pub mod config;
pub mod errors;
pub mod logging;
pub mod middleware;
pub mod request;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{HttpConfig, HttpDefaults};
pub use errors::{ErrorReport, GlobalErrorBody, HttpError, HttpResult};
pub use logging::{init_logging, log_shutdown_info, log_startup_info, LogFormat, LoggingConfig};
pub use middleware::{handle_errors, panic_response, with_error_handling};
pub use request::{ApiJson, ApiPath, ApiQuery};
pub use routes::api_router;
pub use server::{build_router, health_check_handler, start_server, HealthStatus, Server};
pub use state::AppState;
