/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # OData Read Oracle
//!
//! Client for the OData read oracle, a companion test service that returns the
//! reference ("expected") JSON for a feed, entry, service document or metadata
//! document. Test suites compare that output against what their own client
//! library parsed.
//!
//! ## Example
//! ```ignore
//! use odata_read_oracle::prelude::*;
//!
//! setup_logger();
//! let client = OracleClient::new(Config::new())?;
//! let expected = client
//!     .read_feed("http://localhost/tests/Service.svc/Customers".into(), Some(ATOM_MIME), false)
//!     .await?;
//! ```

/// Application layer: configuration, client and service interfaces
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request models, endpoint table and HTTP transport
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Utility helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
