use tracing::info;
use userlab_core::{AppConfig, AppConfigTrait, SERVICE_NAME, VERSION};
use userlab_http::{
    init_logging, log_shutdown_info, log_startup_info, AppState, HttpConfig, LoggingConfig, Server,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app_config = AppConfig::from_env()?;
    let http_config = HttpConfig::from_env()?;

    init_logging(
        LoggingConfig::for_environment(&app_config.environment)
            .with_level(app_config.log_level.as_str())
            .with_service(SERVICE_NAME, VERSION),
    )?;
    log_startup_info(SERVICE_NAME, VERSION);

    let server = Server::new(&app_config, http_config, AppState::new())?;
    info!(
        environment = %app_config.environment,
        address = %server.addr(),
        "serving /api1 through /api10"
    );

    server.run().await?;

    log_shutdown_info(SERVICE_NAME);
    Ok(())
}
