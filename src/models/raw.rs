// Vendor wire shapes: field names vary across API versions/transports, so
// every known spelling is accepted here and reconciled in normalize.

use serde::{Deserialize, Serialize};

/// OAuth2 client-credentials response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// One device record as the vendor sends it. `os`/`health`/`group` arrive as
/// loose objects whose inner field names also drift, so they stay as raw JSON
/// until normalization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEndpoint {
    pub id: String,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub os: Option<serde_json::Value>,
    #[serde(default, rename = "endpoint_type", alias = "type")]
    pub endpoint_type: Option<String>,
    #[serde(default)]
    pub online: Option<bool>,
    #[serde(default)]
    pub health: Option<serde_json::Value>,
    #[serde(default)]
    pub group: Option<serde_json::Value>,
    // Combined address list, two spellings.
    #[serde(default, rename = "ipAddresses")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(default, rename = "ip_addresses")]
    pub ip_addresses_snake: Option<Vec<String>>,
    // Split v4/v6 lists, both spellings each.
    #[serde(default, rename = "ipv4Addresses")]
    pub ipv4_addresses: Option<Vec<String>>,
    #[serde(default, rename = "ipv6Addresses")]
    pub ipv6_addresses: Option<Vec<String>>,
    #[serde(default, rename = "ipv4_addresses")]
    pub ipv4_addresses_snake: Option<Vec<String>>,
    #[serde(default, rename = "ipv6_addresses")]
    pub ipv6_addresses_snake: Option<Vec<String>>,
    #[serde(default, rename = "lastSeen", alias = "last_seen")]
    pub last_seen: Option<String>,
}

/// Pagination cursor block on an inventory page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default, rename = "nextKey")]
    pub next_key: Option<String>,
}

/// One page of the device inventory.
#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryPage {
    #[serde(default)]
    pub items: Option<Vec<RawEndpoint>>,
    #[serde(default)]
    pub pages: Option<PageInfo>,
}
