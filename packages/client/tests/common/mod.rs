// ABOUTME: Shared fixtures for client integration tests
// ABOUTME: Builds clients pointed at a wiremock server and canned response bodies

#![allow(dead_code)]

use serde_json::{json, Value};
use svara_client::{ApiClient, ClientConfig};
use wiremock::MockServer;

pub fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig::new(server.uri()).expect("mock server uri is a valid base url");
    ApiClient::new(config).expect("client builds")
}

pub fn tag_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "key": name.trim().to_lowercase(),
        "created_at": "2024-05-01T09:00:00"
    })
}

pub fn task_json(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "note": null,
        "status": status,
        "due_at": null,
        "today_rank": null,
        "created_at": "2024-05-02T08:00:00",
        "updated_at": "2024-05-02T08:00:00",
        "done_at": null,
        "tags": []
    })
}

/// Body of the only request the server saw, parsed as JSON
pub async fn single_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.expect("request recording enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}
