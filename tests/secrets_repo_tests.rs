// Credential provider tests: load/save round trip, absent and malformed files

use fleetserver::models::Credentials;
use fleetserver::secrets_repo::SecretsRepo;
use tempfile::TempDir;

fn test_credentials() -> Credentials {
    Credentials {
        client_id: "client-abc".into(),
        client_secret: "secret-xyz".into(),
        tenant_id: "tenant-1".into(),
        region: "us01".into(),
    }
}

#[test]
fn test_load_returns_none_when_file_missing() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    assert!(repo.load().is_none());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    let credentials = test_credentials();
    repo.save(&credentials).expect("save");
    assert_eq!(repo.load(), Some(credentials));
}

#[test]
fn test_save_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    let credentials = test_credentials();
    repo.save(&credentials).expect("first save");
    repo.save(&credentials).expect("second save");
    assert_eq!(repo.load(), Some(credentials));
}

#[test]
fn test_save_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("deeper");
    let repo = SecretsRepo::with_base_dir(&nested);
    repo.save(&test_credentials()).expect("save into missing dir");
    assert!(repo.secrets_path().exists());
}

#[test]
fn test_load_returns_none_for_malformed_file() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(repo.secrets_path(), "{ not json").unwrap();
    assert!(repo.load().is_none());
}

#[test]
fn test_load_returns_none_for_wrong_schema() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(repo.secrets_path(), r#"{"client_id": "only"}"#).unwrap();
    assert!(repo.load().is_none());
}

#[test]
fn test_saved_file_is_pretty_printed_json() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    repo.save(&test_credentials()).expect("save");
    let content = std::fs::read_to_string(repo.secrets_path()).unwrap();
    assert!(content.contains('\n'));
    assert!(content.contains("\"client_id\""));
}

#[test]
fn test_paths_live_under_base_dir() {
    let dir = TempDir::new().unwrap();
    let repo = SecretsRepo::with_base_dir(dir.path());
    assert!(repo.secrets_path().starts_with(dir.path()));
    assert!(repo.cache_path().starts_with(dir.path()));
    assert_ne!(repo.secrets_path(), repo.cache_path());
}
