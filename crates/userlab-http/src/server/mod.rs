pub mod health;
pub mod lifecycle;
pub mod server;

pub use health::*;
pub use lifecycle::*;
pub use server::*;
