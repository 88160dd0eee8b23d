//! Shared wiremock fixtures for the launcher manifest endpoints.

#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const MANIFEST_PATH: &str = "/mc/game/version_manifest_v2.json";
pub const BUILDTOOLS_PATH: &str = "/BuildTools.jar";
pub const FAKE_JAR: &[u8] = b"PK\x03\x04 fake server jar";
pub const FAKE_BUILDTOOLS: &[u8] = b"PK\x03\x04 fake buildtools";

pub fn manifest_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), MANIFEST_PATH)
}

pub fn buildtools_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), BUILDTOOLS_PATH)
}

pub fn metadata_url(server: &MockServer, id: &str) -> String {
    format!("{}/v1/packages/{id}.json", server.uri())
}

/// Manifest advertising `latest` and listing `ids` as releases.
pub fn manifest_body(server: &MockServer, latest: &str, ids: &[&str]) -> serde_json::Value {
    let versions: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "type": "release",
                "url": metadata_url(server, id),
                "time": "2023-06-07T09:35:21+00:00",
                "releaseTime": "2023-06-07T09:35:21+00:00",
                "sha1": "0000000000000000000000000000000000000000",
                "complianceLevel": 1
            })
        })
        .collect();
    json!({
        "latest": { "release": latest, "snapshot": "23w31a" },
        "versions": versions
    })
}

pub async fn mount_manifest(server: &MockServer, latest: &str, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(manifest_body(server, latest, ids)))
        .mount(server)
        .await;
}

/// Metadata for `id` plus the jar it points at.
pub async fn mount_version(server: &MockServer, id: &str, jar: &[u8]) {
    let jar_path = format!("/objects/{id}/server.jar");
    Mock::given(method("GET"))
        .and(path(format!("/v1/packages/{id}.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": id,
            "downloads": {
                "client": { "url": format!("{}/objects/{id}/client.jar", server.uri()) },
                "server": { "url": format!("{}{jar_path}", server.uri()), "size": jar.len() }
            }
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(jar_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jar.to_vec()))
        .mount(server)
        .await;
}

pub async fn mount_buildtools(server: &MockServer, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(BUILDTOOLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
