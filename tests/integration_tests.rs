// Integration tests: router-level behavior via axum-test

use std::sync::Arc;

use axum_test::TestServer;
use fleetserver::inventory::InventoryService;
use fleetserver::models::Credentials;
use fleetserver::routes;
use fleetserver::secrets_repo::SecretsRepo;
use fleetserver::vendor_repo::VendorRepo;
use tempfile::TempDir;

fn test_app(dir: &TempDir, force_mock: bool) -> axum::Router {
    let secrets_repo = Arc::new(SecretsRepo::with_base_dir(dir.path()));
    let vendor_repo = Arc::new(
        VendorRepo::with_base_urls(
            "http://127.0.0.1:1/token".into(),
            "http://127.0.0.1:1/endpoints".into(),
        )
        .unwrap(),
    );
    let inventory = Arc::new(InventoryService::new(
        secrets_repo.clone(),
        vendor_repo,
        force_mock,
    ));
    routes::app(inventory, secrets_repo)
}

fn test_server(dir: &TempDir, force_mock: bool) -> TestServer {
    TestServer::new(test_app(dir, force_mock))
}

#[tokio::test]
async fn test_root_endpoint() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.get("/").await;
    response.assert_status_ok();
    response.assert_text("fleetserver: endpoint inventory API");
}

#[tokio::test]
async fn test_version_endpoint() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("fleetserver")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_api_endpoints_force_mock() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.get("/api/endpoints").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["source"], "mock");
    assert!(json.get("error").is_none());
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
    assert_eq!(json["stats"]["totalEndpoints"], 10);
    // Wire shape is camelCase.
    let first = &json["data"][0];
    assert!(first.get("ipAddresses").is_some());
    assert!(first.get("type").is_some());
}

#[tokio::test]
async fn test_api_endpoints_missing_credentials_degrades() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, false);
    let response = server.get("/api/endpoints").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["source"], "mock");
    assert!(
        json["error"]
            .as_str()
            .expect("degraded response carries an error message")
            .contains("credentials")
    );
    assert_eq!(json["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_api_endpoints_type_filter_narrows_data_not_stats() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.get("/api/endpoints").add_query_param("type", "server").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(|e| e["type"] == "server"));
    // Stats still describe the whole fleet.
    assert_eq!(json["stats"]["totalEndpoints"], 10);
}

#[tokio::test]
async fn test_api_endpoints_query_filter() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server
        .get("/api/endpoints")
        .add_query_param("query", "finance")
        .await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_api_endpoints_online_filter() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server
        .get("/api/endpoints")
        .add_query_param("online", "false")
        .await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert!(data.iter().all(|e| e["online"] == false));
}

#[tokio::test]
async fn test_credentials_endpoints_round_trip() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);

    let missing = server.get("/api/credentials").await;
    missing.assert_status_not_found();
    let json: serde_json::Value = missing.json();
    assert!(json["path"].as_str().unwrap().contains("vendor_secrets.json"));

    let credentials = Credentials {
        client_id: "client-abc".into(),
        client_secret: "secret-xyz".into(),
        tenant_id: "tenant-1".into(),
        region: "eu01".into(),
    };
    let saved = server.put("/api/credentials").json(&credentials).await;
    saved.assert_status_ok();

    let loaded = server.get("/api/credentials").await;
    loaded.assert_status_ok();
    let back: Credentials = loaded.json();
    assert_eq!(back, credentials);
}

#[tokio::test]
async fn test_credentials_path_endpoint() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.get("/api/credentials/path").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert!(json["path"].as_str().unwrap().contains("vendor_secrets.json"));
}

#[tokio::test]
async fn test_cache_clear_endpoint() {
    let dir = TempDir::new().unwrap();
    let server = test_server(&dir, true);
    let response = server.post("/api/cache/clear").await;
    response.assert_status_ok();
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"], "cache cleared");
}
