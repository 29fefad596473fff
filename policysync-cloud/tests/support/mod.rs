//! Shared test helpers for tests against a wiremock policy API.
#![allow(dead_code)]

use policysync_cloud::SyncConfig;
use std::path::Path;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";
pub const ORG: &str = "test-org";
pub const LIST_PATH: &str = "/organizations/test-org/policies";

/// Config pointing at the mock server.
pub fn test_config(server: &MockServer) -> SyncConfig {
    SyncConfig::new(TOKEN, ORG, "polset-test").with_api_base_url(server.uri())
}

/// JSON:API listing body for `(id, name)` pairs.
pub fn policy_listing(policies: &[(&str, &str)]) -> serde_json::Value {
    let data: Vec<_> = policies
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "id": id,
                "type": "policies",
                "attributes": { "name": name, "kind": "opa" }
            })
        })
        .collect();
    serde_json::json!({ "data": data })
}

/// Mounts a listing mock answering every GET with `policies`.
pub async fn mount_listing(server: &MockServer, policies: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(policy_listing(policies)))
        .mount(server)
        .await;
}

pub fn upload_path(policy_id: &str) -> String {
    format!("/policies/{policy_id}/upload")
}

/// Writes `(file name, content)` pairs into `dir`.
pub fn write_policies(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

/// Requests received by `server` with the given HTTP method, in arrival order.
pub async fn requests_with_method(server: &MockServer, verb: &str) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == verb)
        .collect()
}
