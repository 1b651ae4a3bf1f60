// Derived dashboard statistics: pure functions of the deduplicated list,
// recomputed on every fetch, never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Endpoint, HealthState};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCounts {
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_endpoints: usize,
    pub online_endpoints: usize,
    pub offline_endpoints: usize,
    pub health: HealthCounts,
    pub by_os: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
    pub by_group: BTreeMap<String, usize>,
}

/// Compute summary counts and frequency tables for the dashboard tiles.
/// BTreeMaps keep the tables deterministically ordered for the UI and tests.
pub fn compute_stats(endpoints: &[Endpoint]) -> DashboardStats {
    let mut stats = DashboardStats {
        total_endpoints: endpoints.len(),
        ..Default::default()
    };
    for ep in endpoints {
        if ep.online {
            stats.online_endpoints += 1;
        }
        match ep.health.overall {
            HealthState::Good => stats.health.good += 1,
            HealthState::Warning => stats.health.warning += 1,
            HealthState::Critical => stats.health.critical += 1,
            HealthState::Unknown => stats.health.unknown += 1,
        }
        *stats.by_os.entry(ep.os.name.clone()).or_insert(0) += 1;
        *stats.by_type.entry(ep.endpoint_type.clone()).or_insert(0) += 1;
        *stats.by_group.entry(ep.group.name.clone()).or_insert(0) += 1;
    }
    stats.offline_endpoints = stats.total_endpoints - stats.online_endpoints;
    stats
}
