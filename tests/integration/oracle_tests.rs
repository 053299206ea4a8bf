use crate::common::{mock_oracle, oracle_path};
use assert_json_diff::assert_json_eq;
use mockito::Matcher;
use odata_read_oracle::prelude::*;

const FEED_URL: &str = "http://localhost/tests/Service.svc/Customers";
const ENTRY_URL: &str = "http://localhost/tests/Service.svc/Customers(1)";

fn url_param(url: &str) -> Matcher {
    Matcher::UrlEncoded("url".into(), url.into())
}

fn mime_param(mime: &str) -> Matcher {
    Matcher::UrlEncoded("mimeType".into(), mime.into())
}

#[tokio::test]
async fn read_feed_atom_goes_to_read_feed() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadFeed).as_str())
        .match_query(Matcher::AllOf(vec![url_param(FEED_URL), mime_param(ATOM_MIME)]))
        .with_status(200)
        .with_header("content-type", "text/plain")
        .with_body(r#"{"__metadata": {"uri": "Customers"}, "results": [{"ID": 1}]}"#)
        .create_async()
        .await;

    let feed = client
        .read_feed(FEED_URL.into(), Some(ATOM_MIME), true)
        .await
        .expect("feed should be read");

    mock.assert_async().await;
    assert_json_eq!(
        feed,
        json!({"__metadata": {"uri": "Customers"}, "results": [{"ID": 1}]})
    );
}

#[tokio::test]
async fn read_feed_json_goes_to_read_json() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadJson).as_str())
        .match_query(Matcher::AllOf(vec![url_param(FEED_URL), mime_param(JSON_MIME)]))
        .with_body(r#"{"value": []}"#)
        .create_async()
        .await;

    let feed = client
        .read_feed(FEED_URL.into(), Some(JSON_MIME), false)
        .await
        .expect("feed should be read");

    mock.assert_async().await;
    assert_json_eq!(feed, json!({"value": []}));
}

#[tokio::test]
async fn read_entry_atom_and_wildcard() {
    let (mut server, client) = mock_oracle().await;
    let atom = server
        .mock("GET", oracle_path(OracleEndpoint::ReadEntry).as_str())
        .match_query(Matcher::AllOf(vec![url_param(ENTRY_URL), mime_param(ATOM_MIME)]))
        .with_body(r#"{"ID": 1}"#)
        .create_async()
        .await;
    let wildcard = server
        .mock("GET", oracle_path(OracleEndpoint::ReadJson).as_str())
        .match_query(Matcher::AllOf(vec![
            url_param(ENTRY_URL),
            mime_param(UNIVERSAL_MIME),
        ]))
        .with_body(r#"{"ID": 1, "Name": "Alfreds"}"#)
        .create_async()
        .await;

    let from_atom = client
        .read_entry(ENTRY_URL.into(), Some(ATOM_MIME), false)
        .await
        .expect("atom entry");
    let from_wildcard = client
        .read_entry(ENTRY_URL.into(), Some(UNIVERSAL_MIME), false)
        .await
        .expect("wildcard entry");

    atom.assert_async().await;
    wildcard.assert_async().await;
    assert_json_eq!(from_atom, json!({"ID": 1}));
    assert_json_eq!(from_wildcard, json!({"ID": 1, "Name": "Alfreds"}));
}

#[tokio::test]
async fn read_service_document_without_mime_goes_to_read_json() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadJson).as_str())
        .match_query(url_param("http://localhost/tests/Service.svc/"))
        .with_body(r#"{"value": [{"name": "Customers", "url": "Customers"}]}"#)
        .create_async()
        .await;

    let document = client
        .read_service_document("http://localhost/tests/Service.svc/".into(), None)
        .await
        .expect("service document");

    mock.assert_async().await;
    assert_json_eq!(
        document,
        json!({"value": [{"name": "Customers", "url": "Customers"}]})
    );
}

#[tokio::test]
async fn read_service_document_atom() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadServiceDocument).as_str())
        .match_query(mime_param(ATOM_MIME))
        .with_body(r#"{"workspaces": []}"#)
        .create_async()
        .await;

    let document = client
        .read_service_document(
            ReadTarget::new("http://localhost/tests/Service.svc/"),
            Some(ATOM_MIME),
        )
        .await
        .expect("service document");

    mock.assert_async().await;
    assert_json_eq!(document, json!({"workspaces": []}));
}

#[tokio::test]
async fn read_metadata_string_and_target_send_the_same_request() {
    let (mut server, client) = mock_oracle().await;
    let metadata_url = "http://localhost/tests/Service.svc/$metadata";
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadMetadata).as_str())
        .match_query(url_param(metadata_url))
        .with_body(r#"{"version": "4.0", "dataServices": {"schema": []}}"#)
        .expect(2)
        .create_async()
        .await;

    let from_str = client
        .read_metadata(metadata_url.into())
        .await
        .expect("metadata from string");
    let from_target = client
        .read_metadata(ReadTarget::new(metadata_url))
        .await
        .expect("metadata from target");

    mock.assert_async().await;
    assert_json_eq!(from_str, from_target);
}

#[tokio::test]
async fn read_feed_forwards_extra_target_params() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadFeed).as_str())
        .match_query(Matcher::AllOf(vec![
            url_param(FEED_URL),
            Matcher::UrlEncoded("level".into(), "2".into()),
            mime_param(ATOM_MIME),
        ]))
        .with_body("[]")
        .create_async()
        .await;

    let feed = client
        .read_feed(
            ReadTarget::new(FEED_URL).with_param("level", "2"),
            Some(ATOM_MIME),
            false,
        )
        .await
        .expect("feed with params");

    mock.assert_async().await;
    assert_json_eq!(feed, json!([]));
}

#[tokio::test]
async fn loopbacks_post_raw_atom() {
    let (mut server, client) = mock_oracle().await;
    let feed_xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Customers</title></feed>"#;
    let entry_xml = r#"<entry xmlns="http://www.w3.org/2005/Atom"><id>1</id></entry>"#;

    let feed_mock = server
        .mock("POST", oracle_path(OracleEndpoint::ReadFeedLoopback).as_str())
        .match_header("content-type", ATOM_MIME)
        .match_body(Matcher::Exact(feed_xml.to_string()))
        .with_body(r#"{"title": "Customers", "entries": []}"#)
        .create_async()
        .await;
    let entry_mock = server
        .mock("POST", oracle_path(OracleEndpoint::ReadEntryLoopback).as_str())
        .match_header("content-type", ATOM_MIME)
        .match_body(Matcher::Exact(entry_xml.to_string()))
        .with_body(r#"{"id": "1"}"#)
        .create_async()
        .await;

    let feed = client
        .read_feed_loopback(feed_xml, false)
        .await
        .expect("feed loopback");
    let entry = client
        .read_entry_loopback(entry_xml, true)
        .await
        .expect("entry loopback");

    feed_mock.assert_async().await;
    entry_mock.assert_async().await;
    assert_json_eq!(feed, json!({"title": "Customers", "entries": []}));
    assert_json_eq!(entry, json!({"id": "1"}));
}

#[tokio::test]
async fn read_json_sends_odata_headers() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", "/tests/Service.svc/Customers(1)")
        .match_header("accept", JSON_MIME)
        .match_header("odata-maxversion", ODATA_MAX_VERSION)
        .with_body(r#"{"ID": 1}"#)
        .create_async()
        .await;

    let entry = client
        .read_json(&format!("{}/tests/Service.svc/Customers(1)", server.url()))
        .await
        .expect("json entry");

    mock.assert_async().await;
    assert_json_eq!(entry, json!({"ID": 1}));
}

#[tokio::test]
async fn read_links_resolve_relative_urls_against_base() {
    let (mut server, client) = mock_oracle().await;
    let entry_mock = server
        .mock("GET", "/tests/Service.svc/Customers(1)/$links/Orders(2)")
        .match_header("accept", JSON_MIME)
        .with_body(r#"{"url": "http://localhost/tests/Service.svc/Orders(2)"}"#)
        .create_async()
        .await;
    let feed_mock = server
        .mock("GET", "/tests/Service.svc/Customers(1)/$links/Orders")
        .match_header("accept", JSON_MIME)
        .with_body(r#"{"value": [{"url": "http://localhost/tests/Service.svc/Orders(2)"}]}"#)
        .create_async()
        .await;

    let link = client
        .read_links_entry("Service.svc/Customers(1)/$links/Orders(2)")
        .await
        .expect("links entry");
    let links = client
        .read_links_feed("Service.svc/Customers(1)/$links/Orders")
        .await
        .expect("links feed");

    entry_mock.assert_async().await;
    feed_mock.assert_async().await;
    assert_json_eq!(
        link,
        json!({"url": "http://localhost/tests/Service.svc/Orders(2)"})
    );
    assert_eq!(links["value"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn read_metadata_sends_only_the_url() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadMetadata).as_str())
        .match_query(Matcher::AllOf(vec![
            url_param("http://localhost/tests/Service.svc/$metadata"),
            Matcher::Regex("^url=[^&]*$".into()),
        ]))
        .with_body(r#"{"version": "4.0"}"#)
        .create_async()
        .await;

    let metadata = client
        .read_metadata("http://localhost/tests/Service.svc/$metadata".into())
        .await
        .expect("metadata");

    mock.assert_async().await;
    assert_json_eq!(metadata, json!({"version": "4.0"}));
}

#[tokio::test]
async fn read_feed_with_empty_mime_type_omits_it() {
    let (mut server, client) = mock_oracle().await;
    let mock = server
        .mock("GET", oracle_path(OracleEndpoint::ReadJson).as_str())
        .match_query(Matcher::AllOf(vec![
            url_param(FEED_URL),
            Matcher::Regex("^url=[^&]*$".into()),
        ]))
        .with_body(r#"{"value": []}"#)
        .create_async()
        .await;

    let feed = client
        .read_feed(FEED_URL.into(), Some(""), false)
        .await
        .expect("feed without mime type");

    mock.assert_async().await;
    assert_json_eq!(feed, json!({"value": []}));
}
