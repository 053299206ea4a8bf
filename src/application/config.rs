/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_ORACLE_PATH};
use crate::error::AppError;
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Location of the read oracle
pub struct Config {
    /// Base URL relative URLs are resolved against, usually the test page root
    pub base_url: String,
    /// Path of the oracle service, relative to `base_url`
    pub oracle_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// Reads `ODATA_ORACLE_BASE_URL` and `ODATA_ORACLE_PATH`, loading a `.env`
    /// file first when one is present.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            base_url: get_env_or_default("ODATA_ORACLE_BASE_URL", String::from(DEFAULT_BASE_URL)),
            oracle_path: get_env_or_default(
                "ODATA_ORACLE_PATH",
                String::from(DEFAULT_ORACLE_PATH),
            ),
        }
    }

    /// Configuration for an oracle hosted under `base_url` at the default path
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            oracle_path: String::from(DEFAULT_ORACLE_PATH),
        }
    }

    /// Parsed base URL. A missing trailing slash is added so joins keep the
    /// last path segment.
    pub fn base(&self) -> Result<Url, AppError> {
        let mut base = self.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(Url::parse(&base)?)
    }

    /// Root URL of the oracle service, ending in `/`
    pub fn oracle_root(&self) -> Result<Url, AppError> {
        let mut path = self.oracle_path.clone();
        if !path.ends_with('/') {
            path.push('/');
        }
        Ok(self.base()?.join(&path)?)
    }

    /// Resolves `url` against the base URL; absolute URLs are returned as is
    pub fn resolve(&self, url: &str) -> Result<Url, AppError> {
        match Url::parse(url) {
            Ok(absolute) => Ok(absolute),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(self.base()?.join(url)?),
            Err(e) => Err(AppError::InvalidUrl(format!("{url}: {e}"))),
        }
    }
}
