//! # Structured Logging
//!
//! One `tracing` subscriber per process, writing plain, pretty or JSON lines
//! to stdout. `RUST_LOG` overrides whatever filter the config carries.

use serde_json::json;
use std::io;
use tracing::info;
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use userlab_core::Environment;

/// Output format written by the subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Pretty => "pretty",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default directive when no explicit filter is set, e.g. `info`
    pub level: String,
    pub format: LogFormat,
    /// Attach source file and line to each event
    pub include_location: bool,
    /// Full filter directives such as `userlab_http=debug,tower_http=info`
    pub env_filter: Option<String>,
    pub service_name: Option<String>,
    pub service_version: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Plain,
            include_location: false,
            env_filter: None,
            service_name: None,
            service_version: None,
        }
    }
}

impl LoggingConfig {
    /// JSON lines, framework crates quietened to warnings
    pub fn production() -> Self {
        Self {
            format: LogFormat::Json,
            env_filter: Some("info,tower_http=warn,axum=warn".to_string()),
            ..Self::default()
        }
    }

    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: LogFormat::Pretty,
            include_location: true,
            ..Self::default()
        }
    }

    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            ..Self::default()
        }
    }

    pub fn for_environment(environment: &Environment) -> Self {
        match environment {
            Environment::Development => Self::development(),
            Environment::Testing => Self::test(),
            Environment::Production => Self::production(),
        }
    }

    /// Replace the level. When a filter is set, its bare default directive is
    /// swapped for the new level and per-target directives are kept.
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        let level = level.into();
        if let Some(filter) = self.env_filter.take() {
            let targets = filter.split(',').filter(|directive| directive.contains('='));
            let directives: Vec<&str> = std::iter::once(level.as_str()).chain(targets).collect();
            self.env_filter = Some(directives.join(","));
        }
        self.level = level;
        self
    }

    pub fn with_service(mut self, name: &str, version: &str) -> Self {
        self.service_name = Some(name.to_string());
        self.service_version = Some(version.to_string());
        self
    }

    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    fn filter_directives(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directives()))?;

    let registry = tracing_subscriber::registry().with(filter);
    let layer = Layer::new()
        .with_writer(io::stdout)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    match config.format {
        LogFormat::Json => registry.with(layer.json()).try_init()?,
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Plain => registry.with(layer).try_init()?,
    }

    info!(
        target: "userlab::logging",
        level = %config.level,
        format = config.format.as_str(),
        service = config.service_name.as_deref().unwrap_or("unknown"),
        version = config.service_version.as_deref().unwrap_or("unknown"),
        "logging initialized"
    );

    Ok(())
}

pub fn log_startup_info(service_name: &str, service_version: &str) {
    let startup = json!({
        "event": "startup",
        "service": service_name,
        "version": service_version,
        "pid": std::process::id(),
        "os": std::env::consts::OS,
        "arch": std::env::consts::ARCH,
        "at": chrono::Utc::now().to_rfc3339(),
    });

    info!(target: "userlab::lifecycle", "{}", startup);
}

pub fn log_shutdown_info(service_name: &str) {
    let shutdown = json!({
        "event": "shutdown",
        "service": service_name,
        "at": chrono::Utc::now().to_rfc3339(),
    });

    info!(target: "userlab::lifecycle", "{}", shutdown);
}
