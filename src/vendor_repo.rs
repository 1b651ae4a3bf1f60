// Vendor cloud API client: OAuth2 client-credentials exchange + paginated
// device inventory. Pagination is flattened here so callers see one sequence.

use std::collections::HashMap;

use tokio::time::Duration;

use crate::models::{Credentials, InventoryPage, RawEndpoint, TokenResponse};

const PAGE_SIZE: u32 = 100;
/// Pause between inventory pages (vendor rate-limit courtesy).
const PAGE_DELAY: Duration = Duration::from_millis(100);
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetcher failure taxonomy. Neither variant is retried automatically; a
/// failure is terminal for the current fetch cycle.
#[derive(Debug, thiserror::Error)]
pub enum VendorError {
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("inventory fetch failed: {0}")]
    Fetch(String),
}

pub struct VendorRepo {
    client: reqwest::Client,
    token_url: String,
    inventory_url: String,
}

impl VendorRepo {
    /// Production endpoints for a vendor region code ("us01", "eu01", ...).
    /// The inventory host is region-selected; the identity service is the
    /// vendor's global host.
    pub fn for_region(region: &str) -> anyhow::Result<Self> {
        Self::with_base_urls(
            "https://id.sophos.com/api/v2/oauth2/token".to_string(),
            format!("https://api-{region}.central.sophos.com/endpoint/v1/endpoints"),
        )
    }

    /// Explicit URLs, for tests against a local stub server.
    pub fn with_base_urls(token_url: String, inventory_url: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            token_url,
            inventory_url,
        })
    }

    /// OAuth2 client-credentials exchange. Any non-2xx status or malformed
    /// body is an auth failure.
    pub async fn get_access_token(
        &self,
        credentials: &Credentials,
    ) -> Result<String, VendorError> {
        let mut params = HashMap::new();
        params.insert("grant_type", "client_credentials");
        params.insert("client_id", credentials.client_id.as_str());
        params.insert("client_secret", credentials.client_secret.as_str());
        params.insert("scope", "token");

        let response = self
            .client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| VendorError::Auth(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(VendorError::Auth(format!(
                "token endpoint returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| VendorError::Auth(format!("malformed token response: {e}")))?;

        tracing::debug!(expires_in = token.expires_in, "Access token acquired");
        Ok(token.access_token)
    }

    /// Retrieve the full device inventory, following `nextKey` cursors until
    /// the vendor stops returning pages.
    pub async fn fetch_endpoints(
        &self,
        access_token: &str,
        credentials: &Credentials,
    ) -> Result<Vec<RawEndpoint>, VendorError> {
        let mut all_endpoints: Vec<RawEndpoint> = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_count = 0u32;

        loop {
            page_count += 1;
            let mut url = format!("{}?pageSize={}", self.inventory_url, PAGE_SIZE);
            if let Some(ref token) = page_token {
                url.push_str(&format!("&pageFromKey={token}"));
            }

            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {access_token}"))
                .header("X-Tenant-ID", &credentials.tenant_id)
                .header("Accept", "application/json")
                .send()
                .await
                .map_err(|e| {
                    VendorError::Fetch(format!("request failed on page {page_count}: {e}"))
                })?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(VendorError::Fetch(format!(
                    "inventory request failed on page {page_count} ({status}): {body}"
                )));
            }

            let page: InventoryPage = response.json().await.map_err(|e| {
                VendorError::Fetch(format!("malformed response on page {page_count}: {e}"))
            })?;

            let items = page.items.unwrap_or_default();
            if items.is_empty() {
                tracing::debug!(page = page_count, "Empty inventory page; stopping");
                break;
            }
            tracing::debug!(
                page = page_count,
                page_items = items.len(),
                running_total = all_endpoints.len() + items.len(),
                "Inventory page retrieved"
            );
            all_endpoints.extend(items);

            match page.pages.and_then(|p| p.next_key) {
                Some(next_key) => page_token = Some(next_key),
                None => break,
            }

            tokio::time::sleep(PAGE_DELAY).await;
        }

        tracing::info!(
            endpoints = all_endpoints.len(),
            pages = page_count,
            "Inventory fetch complete"
        );
        Ok(all_endpoints)
    }
}
