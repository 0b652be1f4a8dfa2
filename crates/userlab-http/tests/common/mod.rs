use axum_test::TestServer;
use userlab_http::{build_router, AppState, HttpConfig};

/// A test server over freshly seeded state
pub fn test_server() -> TestServer {
    test_server_with(AppState::new())
}

#[allow(dead_code)]
pub fn test_server_with(state: AppState) -> TestServer {
    test_server_with_config(state, HttpConfig::default())
}

/// Request tracing is switched off so test output stays readable
#[allow(dead_code)]
pub fn test_server_with_config(state: AppState, config: HttpConfig) -> TestServer {
    let config = HttpConfig {
        enable_tracing: false,
        ..config
    };
    TestServer::new(build_router(state, &config)).unwrap()
}
