// Orchestration tests: force-mock short circuit, degraded fallback paths,
// cache clearing

use std::sync::Arc;

use fleetserver::inventory::{FetchOutcome, InventoryService};
use fleetserver::mock::sample_endpoints;
use fleetserver::secrets_repo::SecretsRepo;
use fleetserver::vendor_repo::VendorRepo;
use tempfile::TempDir;

/// Vendor repo pointed at a dead port; any contact fails fast.
fn unreachable_vendor() -> Arc<VendorRepo> {
    Arc::new(
        VendorRepo::with_base_urls(
            "http://127.0.0.1:1/token".into(),
            "http://127.0.0.1:1/endpoints".into(),
        )
        .unwrap(),
    )
}

fn service(dir: &TempDir, force_mock: bool) -> InventoryService {
    InventoryService::new(
        Arc::new(SecretsRepo::with_base_dir(dir.path())),
        unreachable_vendor(),
        force_mock,
    )
}

#[tokio::test]
async fn test_force_mock_short_circuits_to_sample_set() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir, true);
    let outcome = svc.get_endpoint_data().await;
    assert!(matches!(outcome, FetchOutcome::Mock(_)));
    assert!(outcome.success());
    assert_eq!(outcome.source(), "mock");
    assert_eq!(outcome.error(), None);
    assert_eq!(outcome.endpoints(), sample_endpoints().as_slice());
}

#[tokio::test]
async fn test_force_mock_ignores_credential_state() {
    // Even with valid credentials on disk, the flag wins.
    let dir = TempDir::new().unwrap();
    let secrets = SecretsRepo::with_base_dir(dir.path());
    secrets
        .save(&fleetserver::models::Credentials {
            client_id: "c".into(),
            client_secret: "s".into(),
            tenant_id: "t".into(),
            region: "us01".into(),
        })
        .unwrap();
    let svc = service(&dir, true);
    let outcome = svc.get_endpoint_data().await;
    assert!(matches!(outcome, FetchOutcome::Mock(_)));
    assert_eq!(outcome.endpoints().len(), 10);
}

#[tokio::test]
async fn test_missing_credentials_degrades_to_sample_set() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir, false);
    let outcome = svc.get_endpoint_data().await;
    assert!(matches!(outcome, FetchOutcome::Degraded(..)));
    assert!(!outcome.success());
    assert_eq!(outcome.source(), "mock");
    let error = outcome.error().expect("degraded outcome carries a reason");
    assert!(error.contains("credentials"));
    assert_eq!(outcome.endpoints(), sample_endpoints().as_slice());
}

#[tokio::test]
async fn test_auth_failure_degrades_with_reason() {
    let dir = TempDir::new().unwrap();
    let secrets = SecretsRepo::with_base_dir(dir.path());
    secrets
        .save(&fleetserver::models::Credentials {
            client_id: "c".into(),
            client_secret: "s".into(),
            tenant_id: "t".into(),
            region: "us01".into(),
        })
        .unwrap();
    let svc = service(&dir, false);
    let outcome = svc.get_endpoint_data().await;
    assert!(matches!(outcome, FetchOutcome::Degraded(..)));
    assert!(outcome.error().unwrap().contains("authentication failed"));
    assert_eq!(outcome.endpoints().len(), 10);
}

#[tokio::test]
async fn test_clear_cache_without_file_succeeds() {
    let dir = TempDir::new().unwrap();
    let svc = service(&dir, true);
    assert!(svc.clear_cache());
}

#[tokio::test]
async fn test_clear_cache_removes_existing_file() {
    let dir = TempDir::new().unwrap();
    let secrets = SecretsRepo::with_base_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(secrets.cache_path(), "{}").unwrap();
    let svc = service(&dir, true);
    assert!(svc.clear_cache());
    assert!(!secrets.cache_path().exists());
    // Idempotent: clearing again still succeeds.
    assert!(svc.clear_cache());
}
