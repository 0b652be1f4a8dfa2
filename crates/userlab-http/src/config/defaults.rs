//! Values used when an `HTTP_*` variable is unset

pub struct HttpDefaults;

impl HttpDefaults {
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// 16 MiB
    pub const MAX_REQUEST_SIZE: usize = 16 * 1024 * 1024;
    pub const ENABLE_TRACING: bool = true;
    pub const HEALTH_CHECK_PATH: &'static str = "/health";
}
