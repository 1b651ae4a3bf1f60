// Credential provider: vendor API credentials in a JSON file under the
// per-user application-data directory. Missing or unreadable credentials are
// an expected state (mock mode), never an error to callers.

use std::fs;
use std::path::PathBuf;

use crate::models::Credentials;

const APP_DIR: &str = "fleetserver";
const SECRETS_FILE: &str = "vendor_secrets.json";
const CACHE_FILE: &str = "inventory_cache.json";

pub struct SecretsRepo {
    base_dir: PathBuf,
}

impl SecretsRepo {
    /// Per-user data directory (falls back to the working directory when the
    /// platform has none).
    pub fn new() -> Self {
        let mut base_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base_dir.push(APP_DIR);
        Self { base_dir }
    }

    /// Explicit base directory, from config override or tests.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Where the secrets file lives; shown to the user so they know where to
    /// put credentials.
    pub fn secrets_path(&self) -> PathBuf {
        self.base_dir.join(SECRETS_FILE)
    }

    /// Legacy on-disk inventory cache written by earlier releases; this layer
    /// only ever deletes it.
    pub fn cache_path(&self) -> PathBuf {
        self.base_dir.join(CACHE_FILE)
    }

    /// Load credentials, or `None` when the file is missing, unreadable, or
    /// malformed. Logs say what went wrong but never include secret values.
    pub fn load(&self) -> Option<Credentials> {
        let path = self.secrets_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No secrets file");
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    operation = "load_credentials",
                    "Failed to read secrets file"
                );
                return None;
            }
        };
        match serde_json::from_str::<Credentials>(&content) {
            Ok(credentials) => {
                tracing::info!(
                    tenant_id = %credentials.tenant_id,
                    region = %credentials.region,
                    "Loaded vendor credentials"
                );
                Some(credentials)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    operation = "load_credentials",
                    "Failed to parse secrets file"
                );
                None
            }
        }
    }

    /// Write credentials back, pretty-printed so the file stays
    /// hand-editable. Idempotent.
    pub fn save(&self, credentials: &Credentials) -> anyhow::Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        let json = serde_json::to_string_pretty(credentials)?;
        let path = self.secrets_path();
        fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Saved vendor credentials");
        Ok(())
    }
}

impl Default for SecretsRepo {
    fn default() -> Self {
        Self::new()
    }
}
