//! # Middleware
//!
//! Cross-cutting layers applied around the route table.

pub mod error_handler;

pub use error_handler::{handle_errors, panic_response, with_error_handling};
