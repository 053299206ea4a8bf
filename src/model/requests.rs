/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{MIME_TYPE_PARAM, URL_PARAM};
use crate::model::endpoint::OracleEndpoint;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Resource the oracle should read, plus any extra query parameters
///
/// A bare URL and a target built from that URL produce the same request:
/// ```
/// use odata_read_oracle::model::requests::ReadTarget;
///
/// let from_str: ReadTarget = "http://host/Service.svc/Customers".into();
/// assert_eq!(from_str, ReadTarget::new("http://host/Service.svc/Customers"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadTarget {
    /// URL of the resource under test
    pub url: String,
    /// Additional query parameters forwarded to the oracle, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(String, String)>,
}

impl ReadTarget {
    /// Creates a target with just the resource URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: Vec::new(),
        }
    }

    /// Adds an extra query parameter
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Query pairs sent to the oracle: `url`, the extra parameters, then
    /// `mimeType` when a non-empty one is given.
    #[must_use]
    pub fn query_pairs(&self, mime_type: Option<&str>) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.params.len() + 2);
        pairs.push((URL_PARAM.to_string(), self.url.clone()));
        pairs.extend(self.params.iter().cloned());
        if let Some(mime) = mime_type.filter(|mime| !mime.is_empty()) {
            pairs.push((MIME_TYPE_PARAM.to_string(), mime.to_string()));
        }
        pairs
    }
}

impl From<&str> for ReadTarget {
    fn from(url: &str) -> Self {
        ReadTarget::new(url)
    }
}

impl From<String> for ReadTarget {
    fn from(url: String) -> Self {
        ReadTarget::new(url)
    }
}

impl From<&String> for ReadTarget {
    fn from(url: &String) -> Self {
        ReadTarget::new(url.as_str())
    }
}

/// What an oracle request carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OraclePayload {
    /// Query parameters of a GET
    Query(ReadTarget),
    /// Raw body of a POST
    Body(String),
}

/// A fully described call to one oracle endpoint
#[derive(Debug, Clone)]
pub struct OracleRequest {
    /// HTTP method, GET or POST
    pub method: Method,
    /// Target endpoint
    pub endpoint: OracleEndpoint,
    /// Query parameters or raw body
    pub payload: OraclePayload,
    /// MIME type under test. Sent as `mimeType` with a query payload and as
    /// the `Content-Type` of a body payload.
    pub mime_type: Option<String>,
}

impl OracleRequest {
    /// Builds a GET against `endpoint` reading `target`
    pub fn get(endpoint: OracleEndpoint, target: ReadTarget, mime_type: Option<&str>) -> Self {
        Self {
            method: Method::GET,
            endpoint,
            payload: OraclePayload::Query(target),
            mime_type: mime_type.map(str::to_string),
        }
    }

    /// Builds a POST of a raw `body` with the given content type
    pub fn post(endpoint: OracleEndpoint, body: impl Into<String>, mime_type: &str) -> Self {
        Self {
            method: Method::POST,
            endpoint,
            payload: OraclePayload::Body(body.into()),
            mime_type: Some(mime_type.to_string()),
        }
    }

    /// Query pairs for the outgoing URL; empty for a body payload
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.payload {
            OraclePayload::Query(target) => target.query_pairs(self.mime_type.as_deref()),
            OraclePayload::Body(_) => Vec::new(),
        }
    }
}
