/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{ATOM_MIME, JSON_MIME, UNIVERSAL_MIME};
use std::fmt;

/// Endpoints exposed by the read oracle service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleEndpoint {
    /// Atom feed read
    ReadFeed,
    /// Atom entry read
    ReadEntry,
    /// JSON read, used for every non-Atom media type
    ReadJson,
    /// Atom feed posted by the client and read back
    ReadFeedLoopback,
    /// Atom entry posted by the client and read back
    ReadEntryLoopback,
    /// `$metadata` document read
    ReadMetadata,
    /// Atom service document read
    ReadServiceDocument,
}

impl OracleEndpoint {
    /// Name of the endpoint as it appears in the oracle URL
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OracleEndpoint::ReadFeed => "ReadFeed",
            OracleEndpoint::ReadEntry => "ReadEntry",
            OracleEndpoint::ReadJson => "ReadJson",
            OracleEndpoint::ReadFeedLoopback => "ReadFeedLoopback",
            OracleEndpoint::ReadEntryLoopback => "ReadEntryLoopback",
            OracleEndpoint::ReadMetadata => "ReadMetadata",
            OracleEndpoint::ReadServiceDocument => "ReadServiceDocument",
        }
    }
}

impl fmt::Display for OracleEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media types the oracle distinguishes between
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// `application/atom+xml`
    Atom,
    /// `application/json`
    Json,
    /// `*/*`
    Universal,
    /// Anything else
    Other(String),
}

impl MediaType {
    /// Classifies a raw MIME string. Matching is exact, as the oracle expects.
    #[must_use]
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            ATOM_MIME => MediaType::Atom,
            JSON_MIME => MediaType::Json,
            UNIVERSAL_MIME => MediaType::Universal,
            other => MediaType::Other(other.to_string()),
        }
    }
}

/// Picks the oracle endpoint for a read of the given media type.
///
/// Atom reads go to the operation's own endpoint (`default_endpoint`); JSON,
/// wildcard, unknown or absent media types all go to [`OracleEndpoint::ReadJson`].
#[must_use]
pub fn resolve_read_endpoint(
    mime_type: Option<&str>,
    default_endpoint: OracleEndpoint,
) -> OracleEndpoint {
    match mime_type.map(MediaType::from_mime) {
        Some(MediaType::Atom) => default_endpoint,
        Some(MediaType::Json) | Some(MediaType::Universal) | Some(MediaType::Other(_)) | None => {
            OracleEndpoint::ReadJson
        }
    }
}
