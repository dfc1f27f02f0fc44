//! Shared fixtures for wiremock-backed integration tests.

#![allow(dead_code)]

use serde_json::json;
use tradetracker_client::client::ApiClient;
use tradetracker_client::config::ClientConfig;
use wiremock::MockServer;

/// Client pointed at a mock server with default configuration.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig::new(server.uri())).expect("build client")
}

/// Client with a caller-tweaked configuration, rebased onto the mock server.
pub fn client_with(server: &MockServer, configure: impl FnOnce(ClientConfig) -> ClientConfig) -> ApiClient {
    ApiClient::new(configure(ClientConfig::new(server.uri()))).expect("build client")
}

pub fn user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "email": "trader@example.com",
        "displayName": "Trader"
    })
}

/// Successful auth endpoint body carrying the given token.
pub fn auth_body(token: &str) -> serde_json::Value {
    json!({ "token": token, "user": user_json() })
}

pub fn product_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "film camera",
        "categoryId": 2,
        "purchasePrice": 80.0,
        "purchasedAt": null,
        "sold": false,
        "salePrice": null,
        "soldAt": null
    })
}

/// Matches requests that carry no Authorization header at all.
pub struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &wiremock::Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}
