//! Manifest client tests against a wiremock launcher endpoint.

mod common;

use common::*;
use msm_common::model::VersionRequest;
use msm_net::{build_http_client, ManifestClient, MsmError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ManifestClient {
    ManifestClient::new(build_http_client().unwrap(), manifest_url(server))
}

fn exact(id: &str) -> VersionRequest {
    VersionRequest::Exact(id.to_string())
}

#[tokio::test]
async fn test_latest_resolves_like_the_advertised_release() {
    let server = MockServer::start().await;
    mount_manifest(&server, "1.20.1", &["1.20.1", "1.20", "1.19"]).await;
    let client = client_for(&server);

    let latest = client.resolve(&VersionRequest::Latest).await.unwrap();
    let release = client.resolve(&exact("1.20.1")).await.unwrap();

    assert_eq!(latest, release);
    assert_eq!(latest.id, "1.20.1");
    assert_eq!(latest.metadata_url, metadata_url(&server, "1.20.1"));
}

#[tokio::test]
async fn test_exact_version_resolves_to_its_metadata() {
    let server = MockServer::start().await;
    mount_manifest(&server, "1.20", &["1.20", "1.19"]).await;

    let resolved = client_for(&server).resolve(&exact("1.19")).await.unwrap();

    assert_eq!(resolved.id, "1.19");
    assert_eq!(resolved.metadata_url, metadata_url(&server, "1.19"));
}

#[tokio::test]
async fn test_unknown_version_fails() {
    let server = MockServer::start().await;
    mount_manifest(&server, "1.20", &["1.20", "1.19"]).await;

    let err = client_for(&server).resolve(&exact("1.2.5")).await.unwrap_err();

    assert!(matches!(err, MsmError::UnknownVersion(ref v) if v == "1.2.5"));
}

#[tokio::test]
async fn test_latest_missing_from_list_fails_with_unknown_version() {
    let server = MockServer::start().await;
    mount_manifest(&server, "1.21", &["1.20", "1.19"]).await;

    let err = client_for(&server)
        .resolve(&VersionRequest::Latest)
        .await
        .unwrap_err();

    assert!(matches!(err, MsmError::UnknownVersion(_)));
}

#[tokio::test]
async fn test_server_error_is_manifest_unavailable() {
    let server = MockServer::start().await;
    mount_status(&server, MANIFEST_PATH, 503).await;

    let err = client_for(&server)
        .resolve(&VersionRequest::Latest)
        .await
        .unwrap_err();

    assert!(matches!(err, MsmError::ManifestUnavailable(_)));
}

#[tokio::test]
async fn test_unparseable_manifest_is_manifest_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(MANIFEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_index().await.unwrap_err();

    assert!(matches!(err, MsmError::ManifestUnavailable(_)));
}

#[tokio::test]
async fn test_index_keeps_manifest_order() {
    let server = MockServer::start().await;
    mount_manifest(&server, "1.20", &["1.20", "1.19", "1.18.2"]).await;

    let index = client_for(&server).fetch_index().await.unwrap();

    let ids: Vec<_> = index.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1.20", "1.19", "1.18.2"]);
    assert_eq!(index.latest_release(), "1.20");
    assert!(index.entries().iter().all(|e| e.is_release()));
}
