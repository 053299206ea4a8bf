/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the OData read oracle service
//!
//! # Example
//! ```ignore
//! use odata_read_oracle::prelude::*;
//!
//! let client = OracleClient::new(Config::new())?;
//! let expected = client
//!     .read_entry("Service.svc/Customers(1)".into(), Some(ATOM_MIME), false)
//!     .await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::oracle::ReadOracle;
use crate::application::pagination::{PagedFeed, next_link, page_object, resolve_next_link};
use crate::constants::ATOM_MIME;
use crate::error::AppError;
use crate::model::endpoint::{OracleEndpoint, resolve_read_endpoint};
use crate::model::http::HttpClient;
use crate::model::requests::{OraclePayload, OracleRequest, ReadTarget};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, trace};
use url::Url;

/// Client for the read oracle
pub struct OracleClient {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
    oracle_root: Url,
}

impl OracleClient {
    /// Creates a client for the oracle described by `config`
    ///
    /// # Returns
    /// * `Ok(OracleClient)` - Client ready to use
    /// * `Err(AppError)` - If the configured URLs do not parse or the HTTP
    ///   client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let oracle_root = config.oracle_root()?;
        debug!("Oracle root: {}", oracle_root);
        Ok(Self {
            http_client: Arc::new(HttpClient::new()?),
            config: Arc::new(config),
            oracle_root,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Full URL of an oracle endpoint
    pub fn endpoint_url(&self, endpoint: OracleEndpoint) -> Result<Url, AppError> {
        Ok(self.oracle_root.join(endpoint.as_str())?)
    }

    /// Sends one request to the oracle and decodes the text response as JSON
    pub async fn oracle_request(&self, request: OracleRequest) -> Result<Value, AppError> {
        let url = self.endpoint_url(request.endpoint)?;
        let query = request.query_pairs();
        let body = match &request.payload {
            OraclePayload::Body(content) => Some((
                content.as_str(),
                request.mime_type.as_deref().unwrap_or(ATOM_MIME),
            )),
            OraclePayload::Query(_) => None,
        };
        debug!("Oracle {} {}", request.method, request.endpoint);
        self.http_client
            .request(request.method.clone(), &url, &query, body)
            .await
    }

    async fn read_with_media_type(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
        default_endpoint: OracleEndpoint,
    ) -> Result<Value, AppError> {
        let endpoint = resolve_read_endpoint(mime_type, default_endpoint);
        self.oracle_request(OracleRequest::get(endpoint, target, mime_type))
            .await
    }
}

#[async_trait]
impl ReadOracle for OracleClient {
    async fn read_feed(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
        recognize_dates: bool,
    ) -> Result<Value, AppError> {
        trace!("recognize_dates={} ignored", recognize_dates);
        self.read_with_media_type(target, mime_type, OracleEndpoint::ReadFeed)
            .await
    }

    async fn read_entry(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
        recognize_dates: bool,
    ) -> Result<Value, AppError> {
        trace!("recognize_dates={} ignored", recognize_dates);
        self.read_with_media_type(target, mime_type, OracleEndpoint::ReadEntry)
            .await
    }

    async fn read_feed_loopback(
        &self,
        atom_feed_xml: &str,
        recognize_dates: bool,
    ) -> Result<Value, AppError> {
        trace!("recognize_dates={} ignored", recognize_dates);
        self.oracle_request(OracleRequest::post(
            OracleEndpoint::ReadFeedLoopback,
            atom_feed_xml,
            ATOM_MIME,
        ))
        .await
    }

    async fn read_entry_loopback(
        &self,
        atom_entry_xml: &str,
        recognize_dates: bool,
    ) -> Result<Value, AppError> {
        trace!("recognize_dates={} ignored", recognize_dates);
        self.oracle_request(OracleRequest::post(
            OracleEndpoint::ReadEntryLoopback,
            atom_entry_xml,
            ATOM_MIME,
        ))
        .await
    }

    async fn read_links_entry(&self, url: &str) -> Result<Value, AppError> {
        self.read_json(url).await
    }

    async fn read_links_feed(&self, url: &str) -> Result<Value, AppError> {
        self.read_json(url).await
    }

    async fn read_metadata(&self, target: ReadTarget) -> Result<Value, AppError> {
        self.oracle_request(OracleRequest::get(OracleEndpoint::ReadMetadata, target, None))
            .await
    }

    async fn read_service_document(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
    ) -> Result<Value, AppError> {
        self.read_with_media_type(target, mime_type, OracleEndpoint::ReadServiceDocument)
            .await
    }

    async fn read_json(&self, url: &str) -> Result<Value, AppError> {
        let url = self.config.resolve(url)?;
        self.http_client.get_json(&url).await
    }

    async fn read_json_across_server_pages(&self, url: &str) -> Result<Value, AppError> {
        let mut feed = PagedFeed::new();
        let mut next = Some(url.to_string());

        while let Some(current) = next.take() {
            let page = page_object(self.read_json(&current).await?)?;
            next = next_link(&page).map(|link| resolve_next_link(&current, link));
            if let Some(link) = &next {
                debug!("Following next link {}", link);
            }
            feed.merge_page(page);
        }

        info!("Read {} server page(s) starting at {}", feed.pages(), url);
        Ok(feed.into_value())
    }
}
