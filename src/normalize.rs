// Raw vendor records -> canonical endpoints.
// Field names drift across API versions, so extraction is an ordered list of
// named rules; the first non-empty match wins and every miss resolves to an
// explicit default.

use std::collections::HashSet;

use crate::models::{Endpoint, GroupInfo, HealthInfo, HealthState, OsInfo, RawEndpoint};

/// First non-empty string among the given keys of a loose vendor object.
fn str_field(value: Option<&serde_json::Value>, keys: &[&str]) -> Option<String> {
    let value = value?;
    for key in keys {
        if let Some(s) = value.get(key).and_then(|v| v.as_str())
            && !s.is_empty()
        {
            return Some(s.to_string());
        }
    }
    None
}

fn non_empty(s: &Option<String>) -> Option<String> {
    s.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Reconcile the four possible raw IP sources into one ordered list:
/// 1. combined `ipAddresses` if non-empty, verbatim;
/// 2. else combined `ip_addresses` if non-empty, verbatim;
/// 3. else v4 then v6, camelCase then snake_case, concatenated in that order.
pub fn resolve_ip_addresses(raw: &RawEndpoint) -> Vec<String> {
    for combined in [&raw.ip_addresses, &raw.ip_addresses_snake] {
        if let Some(list) = combined
            && !list.is_empty()
        {
            return list.clone();
        }
    }
    let mut out = Vec::new();
    for split in [
        &raw.ipv4_addresses,
        &raw.ipv6_addresses,
        &raw.ipv4_addresses_snake,
        &raw.ipv6_addresses_snake,
    ] {
        if let Some(list) = split {
            out.extend(list.iter().cloned());
        }
    }
    out
}

/// Normalize one raw record. Deterministic and idempotent: the same raw
/// record always yields the same canonical record.
pub fn normalize(raw: &RawEndpoint) -> Endpoint {
    Endpoint {
        id: raw.id.clone(),
        hostname: non_empty(&raw.hostname).unwrap_or_else(|| "Unknown".into()),
        os: OsInfo {
            name: str_field(raw.os.as_ref(), &["name", "platform"])
                .unwrap_or_else(|| "Unknown OS".into()),
            version: str_field(raw.os.as_ref(), &["version"]),
        },
        endpoint_type: non_empty(&raw.endpoint_type).unwrap_or_else(|| "computer".into()),
        online: raw.online.unwrap_or(false),
        health: HealthInfo {
            overall: str_field(raw.health.as_ref(), &["overall"])
                .map(|s| HealthState::from_vendor(&s))
                .unwrap_or(HealthState::Unknown),
        },
        group: GroupInfo {
            name: str_field(raw.group.as_ref(), &["name"]).unwrap_or_else(|| "No Group".into()),
        },
        ip_addresses: resolve_ip_addresses(raw),
        last_seen: raw.last_seen.clone(),
    }
}

/// Normalize a whole batch.
pub fn normalize_all(raws: &[RawEndpoint]) -> Vec<Endpoint> {
    raws.iter().map(normalize).collect()
}

/// Drop duplicate ids, keeping the first occurrence. Duplicates from upstream
/// are a data-quality problem, not a fatal one.
pub fn dedup_by_id(endpoints: Vec<Endpoint>) -> Vec<Endpoint> {
    let mut seen = HashSet::with_capacity(endpoints.len());
    let mut out = Vec::with_capacity(endpoints.len());
    for ep in endpoints {
        if seen.insert(ep.id.clone()) {
            out.push(ep);
        } else {
            tracing::warn!(
                id = %ep.id,
                operation = "dedup_by_id",
                "Duplicate endpoint id from upstream; keeping first occurrence"
            );
        }
    }
    out
}
