/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::ReadTarget;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the read oracle
///
/// Every operation resolves to the JSON the oracle produced for the resource,
/// which tests then compare against their own parsed output.
///
/// `recognize_dates` is accepted for parity with older harnesses and has no
/// effect.
#[async_trait]
pub trait ReadOracle: Send + Sync {
    /// Reads a feed through the oracle
    ///
    /// # Arguments
    /// * `target` - Feed URL, optionally with extra query parameters
    /// * `mime_type` - Media type under test; Atom goes to `ReadFeed`, anything
    ///   else to `ReadJson`
    /// * `recognize_dates` - Ignored
    async fn read_feed(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
        recognize_dates: bool,
    ) -> Result<Value, AppError>;

    /// Reads a single entry through the oracle
    ///
    /// Same endpoint selection as [`ReadOracle::read_feed`], with `ReadEntry`
    /// for Atom.
    async fn read_entry(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
        recognize_dates: bool,
    ) -> Result<Value, AppError>;

    /// Posts a client-produced Atom feed to the oracle and reads it back
    async fn read_feed_loopback(
        &self,
        atom_feed_xml: &str,
        recognize_dates: bool,
    ) -> Result<Value, AppError>;

    /// Posts a client-produced Atom entry to the oracle and reads it back
    async fn read_entry_loopback(
        &self,
        atom_entry_xml: &str,
        recognize_dates: bool,
    ) -> Result<Value, AppError>;

    /// Reads a `$links` entry directly from the service as JSON
    async fn read_links_entry(&self, url: &str) -> Result<Value, AppError>;

    /// Reads a `$links` collection directly from the service as JSON
    async fn read_links_feed(&self, url: &str) -> Result<Value, AppError>;

    /// Reads a `$metadata` document through the oracle
    async fn read_metadata(&self, target: ReadTarget) -> Result<Value, AppError>;

    /// Reads a service document through the oracle
    ///
    /// Atom goes to `ReadServiceDocument`, anything else to `ReadJson`.
    async fn read_service_document(
        &self,
        target: ReadTarget,
        mime_type: Option<&str>,
    ) -> Result<Value, AppError>;

    /// GETs `url` from the service as OData JSON
    async fn read_json(&self, url: &str) -> Result<Value, AppError>;

    /// Reads a server-paged collection, following `@odata.nextLink` until the
    /// last page, and returns one object holding every item under `value`.
    async fn read_json_across_server_pages(&self, url: &str) -> Result<Value, AppError>;
}
