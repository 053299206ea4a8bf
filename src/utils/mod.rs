/// Environment variable helpers used by the configuration layer
pub mod config;
/// Recursive JSON property removal
pub mod json;
/// Logging setup
pub mod logger;

pub use config::*;
pub use json::*;
pub use logger::*;
