// Filter/search predicates for the presentation layer.
// Filters narrow the returned list only; stats always cover the full list.

use serde::Deserialize;

use super::{Endpoint, HealthState};

/// Deserialized straight from query parameters on the inventory route.
/// All fields optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointFilter {
    /// Case-insensitive substring over id, hostname, OS name, group, and IPs.
    pub query: Option<String>,
    pub online: Option<bool>,
    pub health: Option<HealthState>,
    #[serde(rename = "type")]
    pub endpoint_type: Option<String>,
    pub group: Option<String>,
}

impl EndpointFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.online.is_none()
            && self.health.is_none()
            && self.endpoint_type.is_none()
            && self.group.is_none()
    }

    pub fn matches(&self, ep: &Endpoint) -> bool {
        if let Some(online) = self.online
            && ep.online != online
        {
            return false;
        }
        if let Some(health) = self.health
            && ep.health.overall != health
        {
            return false;
        }
        if let Some(ref t) = self.endpoint_type
            && !ep.endpoint_type.eq_ignore_ascii_case(t)
        {
            return false;
        }
        if let Some(ref g) = self.group
            && !ep.group.name.eq_ignore_ascii_case(g)
        {
            return false;
        }
        if let Some(ref q) = self.query {
            let q = q.to_lowercase();
            if q.is_empty() {
                return true;
            }
            let haystack_hit = ep.id.to_lowercase().contains(&q)
                || ep.hostname.to_lowercase().contains(&q)
                || ep.os.name.to_lowercase().contains(&q)
                || ep.group.name.to_lowercase().contains(&q)
                || ep.ip_addresses.iter().any(|ip| ip.to_lowercase().contains(&q));
            if !haystack_hit {
                return false;
            }
        }
        true
    }
}
