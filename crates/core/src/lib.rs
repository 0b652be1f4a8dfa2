//! # userlab-core
//!
//! Domain layer of the userlab tutorial API: user records, the in-memory
//! repository, request validation, name search and pagination, plus the
//! application configuration shared by the HTTP crate and the binary.

pub mod config;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod search;
pub mod validation;

pub use config::{env_or, env_string_or, AppConfig, AppConfigTrait, ConfigError, Environment};
pub use errors::{CoreError, CoreResult};
pub use models::{
    ApiEnvelope, CreateUserRequest, ErrorResponse, NameRequest, User, UserIdResponse, UserProfile,
};
pub use pagination::{paginate, Page, PaginationParams};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use search::filter_by_name;
pub use validation::{is_blank, parse_user_id, validate_name, UserIdError, NAME_REQUIRED};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name used in logs and health responses
pub const SERVICE_NAME: &str = "userlab";
