//! Authentication flow tests.
//!
//! Covers the token exchange, session state, logout, and the header
//! behavior of unauthenticated clients.

mod common;

use common::*;
use wiremock::matchers::body_string_contains;

#[tokio::test]
async fn test_authenticate_stores_token_and_data_source() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=guacadmin"))
        .and(body_string_contains("password=secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authToken": "T",
            "username": "guacadmin",
            "dataSource": "postgresql",
            "availableDataSources": ["postgresql"]
        })))
        .mount(&server)
        .await;

    let mut client = GuacamoleClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    assert_eq!(client.auth_token(), None);
    assert_eq!(client.data_source(), None);

    client.authenticate("guacadmin", "secret").await.unwrap();
    assert_eq!(client.auth_token(), Some("T"));
    assert_eq!(client.data_source(), Some("postgresql"));
}

#[tokio::test]
async fn test_authenticate_failure_surfaces_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Invalid login",
            "type": "INVALID_CREDENTIALS"
        })))
        .mount(&server)
        .await;

    let mut client = GuacamoleClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    let err = client.authenticate("guacadmin", "wrong").await.unwrap_err();

    match err.root() {
        ClientError::Api {
            status,
            error_type,
            message,
        } => {
            assert_eq!(*status, 403);
            assert_eq!(error_type, "INVALID_CREDENTIALS");
            assert_eq!(message, "Invalid login");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    // A failed exchange leaves session state untouched
    assert_eq!(client.auth_token(), None);
    assert_eq!(client.data_source(), None);
}

#[tokio::test]
async fn test_authenticate_failure_keeps_previous_session() {
    // A builder-started (non-pooled) server is required here: pooled servers
    // from `MockServer::start()` keep listening after drop, so dropping one
    // cannot produce the transport failure this test relies on.
    let server = MockServer::builder().start().await;
    let mut client = authenticated_client(&server).await;

    // Force a transport failure on the next exchange
    drop(server);

    let err = client.authenticate("guacadmin", "wrong").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert_eq!(client.auth_token(), Some(TEST_TOKEN));
    assert_eq!(client.data_source(), Some("postgresql"));
}

#[tokio::test]
async fn test_reauthenticate_overwrites_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authToken": "FIRST",
            "username": "guacadmin",
            "dataSource": "postgresql"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "authToken": "SECOND",
            "username": "guacadmin",
            "dataSource": "mysql"
        })))
        .mount(&server)
        .await;

    let mut client = GuacamoleClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();

    client.authenticate("guacadmin", "pw").await.unwrap();
    assert_eq!(client.auth_token(), Some("FIRST"));
    assert_eq!(client.data_source(), Some("postgresql"));

    // A second exchange on the same client simply overwrites the session
    client.authenticate("guacadmin", "pw").await.unwrap();
    assert_eq!(client.auth_token(), Some("SECOND"));
    assert_eq!(client.data_source(), Some("mysql"));
}

#[tokio::test]
async fn test_logout_sends_delete_with_token() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server).await;

    Mock::given(method("DELETE"))
        .and(path("/api/session"))
        .and(header("Guacamole-Token", TEST_TOKEN))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();

    // Local session fields survive logout; the caller discards the client
    assert_eq!(client.auth_token(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn test_unauthenticated_request_omits_token_header() {
    let server = MockServer::start().await;

    // The server sees no Guacamole-Token header and rejects the call; the
    // client surfaces that rejection instead of failing locally.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Permission Denied.",
            "type": "PERMISSION_DENIED"
        })))
        .mount(&server)
        .await;

    let client = GuacamoleClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    let err = client.list_connections().await.unwrap_err();
    assert!(err.is_permission_denied());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("Guacamole-Token"));
    // No data source yet: the path carries an empty segment
    assert_eq!(requests[0].url.path(), "/api/session/data//connections");
}
