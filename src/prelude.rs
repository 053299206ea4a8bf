/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Prelude
//!
//! Imports the types most oracle-driven tests need.
//!
//! ```rust
//! use odata_read_oracle::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8989/tests/");
//! let client = OracleClient::new(config).unwrap();
//! ```

// ============================================================================
// CONFIGURATION AND CLIENT
// ============================================================================

/// Oracle location
pub use crate::application::config::Config;

/// Oracle client
pub use crate::application::client::OracleClient;

/// Oracle interface
pub use crate::application::interfaces::ReadOracle;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// MODELS
// ============================================================================

/// Endpoint table and request descriptors
pub use crate::model::{
    MediaType, OracleEndpoint, OraclePayload, OracleRequest, ReadTarget, resolve_read_endpoint,
};

/// Pagination helpers
pub use crate::application::pagination::{PagedFeed, resolve_next_link};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// JSON property removal
pub use crate::utils::json::{remove_property, strip_property};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
