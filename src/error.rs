/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Errors returned by the oracle client
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (connection refused, broken body, ...)
    Network(reqwest::Error),
    /// The server answered with a non-success status
    Unexpected(StatusCode),
    /// The response body is not valid JSON
    Json(serde_json::Error),
    /// A URL could not be parsed or joined
    InvalidUrl(String),
    /// The response is valid JSON but has the wrong shape
    InvalidResponse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            AppError::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidUrl(err.to_string())
    }
}
