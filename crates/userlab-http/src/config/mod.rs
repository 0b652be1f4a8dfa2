pub mod defaults;
pub mod http_config;

pub use defaults::*;
pub use http_config::*;
