/// Oracle endpoints and the media type lookup table
pub mod endpoint;
/// HTTP transport
pub mod http;
/// Request descriptors
pub mod requests;

pub use endpoint::{MediaType, OracleEndpoint, resolve_read_endpoint};
pub use http::HttpClient;
pub use requests::{OraclePayload, OracleRequest, ReadTarget};
