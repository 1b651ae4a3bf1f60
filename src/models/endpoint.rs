// Canonical endpoint record: what the dashboard sees after normalization

use serde::{Deserialize, Serialize};

/// Vendor-assigned aggregate health classification; serializes to lowercase
/// JSON (e.g. "good").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Good,
    Warning,
    Critical,
    #[serde(other)]
    Unknown,
}

impl HealthState {
    /// Parse from a vendor status string (e.g. "good", "suspicious" maps to unknown).
    pub fn from_vendor(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "good" => HealthState::Good,
            "warning" => HealthState::Warning,
            "critical" => HealthState::Critical,
            _ => HealthState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Good => "good",
            HealthState::Warning => "warning",
            HealthState::Critical => "critical",
            HealthState::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OsInfo {
    pub name: String,
    pub version: Option<String>,
}

impl Default for OsInfo {
    fn default() -> Self {
        Self {
            name: "Unknown OS".into(),
            version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthInfo {
    pub overall: HealthState,
}

impl Default for HealthInfo {
    fn default() -> Self {
        Self {
            overall: HealthState::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub name: String,
}

impl Default for GroupInfo {
    fn default() -> Self {
        Self {
            name: "No Group".into(),
        }
    }
}

/// One managed device, post-normalization. Every field except `id` has an
/// explicit default; absence upstream never leaks into this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub id: String,
    pub hostname: String,
    pub os: OsInfo,
    /// Open category set ("computer", "server", "mobile", ...).
    #[serde(rename = "type")]
    pub endpoint_type: String,
    pub online: bool,
    pub health: HealthInfo,
    pub group: GroupInfo,
    pub ip_addresses: Vec<String>,
    /// ISO-8601 timestamp from the vendor, passed through untouched.
    pub last_seen: Option<String>,
}
