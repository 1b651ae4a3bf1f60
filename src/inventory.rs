// Orchestration: credentials -> token -> fetch -> normalize -> dedup, with a
// uniform fallback to the fixed sample set. Evaluated fresh on every call;
// nothing here outlives one fetch cycle.

use std::sync::Arc;

use crate::mock;
use crate::models::Endpoint;
use crate::normalize;
use crate::secrets_repo::SecretsRepo;
use crate::vendor_repo::VendorRepo;

/// Result of one fetch cycle. Three states, exhaustively checkable:
/// live vendor data, fallback after a failure (with the reason), or the
/// intentionally-requested sample set.
#[derive(Debug)]
pub enum FetchOutcome {
    Live(Vec<Endpoint>),
    Degraded(Vec<Endpoint>, String),
    Mock(Vec<Endpoint>),
}

impl FetchOutcome {
    pub fn endpoints(&self) -> &[Endpoint] {
        match self {
            FetchOutcome::Live(data) | FetchOutcome::Degraded(data, _) | FetchOutcome::Mock(data) => {
                data
            }
        }
    }

    /// Where the data came from, as the UI labels it.
    pub fn source(&self) -> &'static str {
        match self {
            FetchOutcome::Live(_) => "api",
            FetchOutcome::Degraded(..) | FetchOutcome::Mock(_) => "mock",
        }
    }

    pub fn success(&self) -> bool {
        !matches!(self, FetchOutcome::Degraded(..))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchOutcome::Degraded(_, reason) => Some(reason),
            _ => None,
        }
    }
}

pub struct InventoryService {
    secrets_repo: Arc<SecretsRepo>,
    vendor_repo: Arc<VendorRepo>,
    force_mock: bool,
}

impl InventoryService {
    pub fn new(
        secrets_repo: Arc<SecretsRepo>,
        vendor_repo: Arc<VendorRepo>,
        force_mock: bool,
    ) -> Self {
        Self {
            secrets_repo,
            vendor_repo,
            force_mock,
        }
    }

    /// One fetch cycle. Never fails visibly: every failure below this
    /// boundary is converted into the sample set plus a human-readable
    /// reason.
    pub async fn get_endpoint_data(&self) -> FetchOutcome {
        if self.force_mock {
            tracing::debug!("force_mock set; serving sample data");
            return FetchOutcome::Mock(mock::sample_endpoints());
        }

        let Some(credentials) = self.secrets_repo.load() else {
            return FetchOutcome::Degraded(
                mock::sample_endpoints(),
                format!(
                    "No vendor credentials found; expected a secrets file at {}",
                    self.secrets_repo.secrets_path().display()
                ),
            );
        };

        let token = match self.vendor_repo.get_access_token(&credentials).await {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(error = %e, operation = "get_access_token", "Falling back to sample data");
                return FetchOutcome::Degraded(mock::sample_endpoints(), e.to_string());
            }
        };

        let raw = match self.vendor_repo.fetch_endpoints(&token, &credentials).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, operation = "fetch_endpoints", "Falling back to sample data");
                return FetchOutcome::Degraded(mock::sample_endpoints(), e.to_string());
            }
        };

        let endpoints = normalize::dedup_by_id(normalize::normalize_all(&raw));
        FetchOutcome::Live(endpoints)
    }

    /// Delete the legacy on-disk inventory cache if present. Pass-through
    /// with error swallowing; there is no internal cache to invalidate.
    pub fn clear_cache(&self) -> bool {
        let path = self.secrets_repo.cache_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No cache file to clear");
            return true;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "Cache file cleared");
                true
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %path.display(),
                    operation = "clear_cache",
                    "Failed to clear cache file"
                );
                false
            }
        }
    }
}
