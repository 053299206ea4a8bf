/// Oracle client
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
/// Merging of server-paged collections
pub mod pagination;
