#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nmslink_api::{Client, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = Client::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Device tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_devices() {
    let (server, client) = setup().await;

    let envelope = json!({
        "status": "ok",
        "count": 2,
        "devices": [
            { "device_id": 1, "hostname": "edge-rtr-01", "sysName": "edge" },
            { "device_id": 2, "hostname": "core-sw-01", "os": "ios" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/devices/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let (devices, count) = client.list_devices().await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_id, 1);
    assert_eq!(devices[0].hostname, "edge-rtr-01");
    assert_eq!(devices[1].hostname, "core-sw-01");
}

#[tokio::test]
async fn test_auth_token_header() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let token: secrecy::SecretString = "s3cret-token".to_string().into();
    let client = Client::new(base_url, &token, &TransportConfig::default()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v0/devices/"))
        .and(header("X-Auth-Token", "s3cret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "count": 0,
            "devices": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (devices, count) = client.list_devices().await.unwrap();
    assert_eq!(count, 0);
    assert!(devices.is_empty());
}

// ── Link tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_links() {
    let (server, client) = setup().await;

    let envelope = json!({
        "status": "ok",
        "count": 1,
        "links": [{
            "id": 7,
            "local_device_id": 1,
            "remote_device_id": 2,
            "local_port_id": 10,
            "remote_port_id": 20,
            "protocol": "lldp"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/resources/links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let (links, count) = client.list_links().await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].local_port_id, 10);
    assert_eq!(links[0].remote_port_id, 20);
    assert_eq!(links[0].protocol, "lldp");
}

// ── Port tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_ports_sends_columns_param() {
    let (server, client) = setup().await;

    let envelope = json!({
        "status": "ok",
        "count": 2,
        "ports": [
            { "device_id": 1, "port_id": 10, "ifName": "eth0" },
            { "device_id": 2, "port_id": 20, "ifName": "xe-0/0/1" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/ports"))
        .and(query_param("columns", "device_id,port_id,ifName"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .expect(1)
        .mount(&server)
        .await;

    let (ports, count) = client.list_ports().await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(ports[0].ifname, "eth0");
    assert_eq!(ports[1].ifname, "xe-0/0/1");
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_non_ok_status() {
    let (server, client) = setup().await;

    let envelope = json!({
        "status": "error",
        "message": "API key does not have read access"
    });

    Mock::given(method("GET"))
        .and(path("/api/v0/resources/links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
        .mount(&server)
        .await;

    let result = client.list_links().await;

    match result {
        Err(Error::Api {
            resource,
            ref message,
        }) => {
            assert_eq!(resource, "links");
            assert!(
                message.contains("read access"),
                "expected server message, got: {message}"
            );
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_ok_status_without_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/devices/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    match result {
        Err(Error::Api { ref message, .. }) => {
            assert_eq!(message, "status=error");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_devices().await;

    assert!(
        matches!(result, Err(Error::Authentication { .. })),
        "expected Authentication error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v0/ports"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let result = client.list_ports().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("gateway timeout"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
