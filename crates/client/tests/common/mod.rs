//! Common test utilities for integration tests.
//!
//! Provides a mock-server-backed authenticated client plus re-exports of the
//! types most tests need. All integration tests use these helpers so the
//! login plumbing stays in one place.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the
//!   crate root and must be valid JSON
//! - `authenticated_client` mounts the token-exchange mock itself; tests
//!   only mount the resource endpoints they exercise

// Re-export test utilities from guacamole-client
#[allow(unused_imports)]
pub use guacamole_client::testing::load_fixture;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use guacamole_client::{ClientError, GuacamoleClient};
#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, header, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// The session token issued by the `auth/token.json` fixture.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "6OF2K82LTVUB6TVITS3OHGJYYUXW4X4EKFY4OZZP";

/// Build a client against the mock server and authenticate it using the
/// standard token fixture (data source "postgresql").
#[allow(dead_code)]
pub async fn authenticated_client(server: &MockServer) -> GuacamoleClient {
    Mock::given(method("POST"))
        .and(path("/api/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("auth/token.json")))
        .mount(server)
        .await;

    let mut client = GuacamoleClient::builder()
        .base_url(server.uri())
        .build()
        .expect("build client");
    client
        .authenticate("guacadmin", "guacadmin")
        .await
        .expect("authenticate");
    client
}
