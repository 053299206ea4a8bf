/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::constants::{JSON_MIME, ODATA_MAX_VERSION, ODATA_MAX_VERSION_HEADER, USER_AGENT};
use crate::error::AppError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpInternalClient, Method, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

/// Thin HTTP layer shared by every oracle operation
///
/// Bodies are always read as text and decoded with `serde_json` here, never
/// through reqwest's content-type driven JSON support: the oracle does not
/// label its responses reliably.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
}

impl HttpClient {
    /// Creates the underlying reqwest client
    pub fn new() -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http_client })
    }

    /// GETs `url` as OData JSON
    ///
    /// Sends `Accept: application/json` and `OData-MaxVersion: 4.0`.
    pub async fn get_json(&self, url: &Url) -> Result<Value, AppError> {
        let request = self
            .http_client
            .get(url.clone())
            .header(ACCEPT, JSON_MIME)
            .header(ODATA_MAX_VERSION_HEADER, ODATA_MAX_VERSION);
        let body = self.send_for_text(Method::GET, url, request).await?;
        parse_json(&body)
    }

    /// Sends a request with query parameters and an optional raw body, and
    /// decodes the text response as JSON.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Fully resolved endpoint URL
    /// * `query` - Query pairs appended to the URL
    /// * `body` - Raw body and its content type
    pub async fn request(
        &self,
        method: Method,
        url: &Url,
        query: &[(String, String)],
        body: Option<(&str, &str)>,
    ) -> Result<Value, AppError> {
        let mut request = self.http_client.request(method.clone(), url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some((content, content_type)) = body {
            request = request
                .header(CONTENT_TYPE, content_type)
                .body(content.to_string());
        }
        let text = self.send_for_text(method, url, request).await?;
        parse_json(&text)
    }

    async fn send_for_text(
        &self,
        method: Method,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<String, AppError> {
        debug!("{} {}", method, url);
        let response = self.request_internal(request).await?;
        Ok(response.text().await?)
    }

    async fn request_internal(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response)
    }
}

/// Decodes a raw response body
pub fn parse_json(body: &str) -> Result<Value, AppError> {
    Ok(serde_json::from_str(body)?)
}
