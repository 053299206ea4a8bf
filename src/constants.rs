/// MIME type for JSON payloads
pub const JSON_MIME: &str = "application/json";
/// Wildcard MIME type
pub const UNIVERSAL_MIME: &str = "*/*";
/// MIME type for Atom feeds and entries
pub const ATOM_MIME: &str = "application/atom+xml";

/// Default host the oracle is served from when `ODATA_ORACLE_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost/tests/";
/// Path of the oracle service, relative to the base URL
pub const DEFAULT_ORACLE_PATH: &str = "./common/ODataReadOracle.svc/";

/// Header advertising the highest OData protocol version the client accepts
pub const ODATA_MAX_VERSION_HEADER: &str = "OData-MaxVersion";
/// Value sent in the `OData-MaxVersion` header
pub const ODATA_MAX_VERSION: &str = "4.0";

/// Response property carrying the link to the next server page
pub const NEXT_LINK_PROPERTY: &str = "@odata.nextLink";
/// Response property holding the items of a collection
pub const VALUE_PROPERTY: &str = "value";
/// Marker ending the service root segment of an OData URL
pub const SERVICE_ROOT_SUFFIX: &str = ".svc/";

/// Query parameter carrying the target resource URL
pub const URL_PARAM: &str = "url";
/// Query parameter carrying the MIME type under test
pub const MIME_TYPE_PARAM: &str = "mimeType";

/// User agent string used in HTTP requests to the oracle
pub const USER_AGENT: &str = concat!("odata-read-oracle/", env!("CARGO_PKG_VERSION"));
