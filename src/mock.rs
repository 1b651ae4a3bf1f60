// Fixed sample inventory shown when credentials are absent or the vendor API
// is unreachable. Constant data; building it cannot fail.

use crate::models::{Endpoint, GroupInfo, HealthInfo, HealthState, OsInfo};

fn endpoint(
    id: &str,
    hostname: &str,
    os_name: &str,
    os_version: Option<&str>,
    endpoint_type: &str,
    online: bool,
    health: HealthState,
    group: &str,
    ips: &[&str],
    last_seen: &str,
) -> Endpoint {
    Endpoint {
        id: id.into(),
        hostname: hostname.into(),
        os: OsInfo {
            name: os_name.into(),
            version: os_version.map(Into::into),
        },
        endpoint_type: endpoint_type.into(),
        online,
        health: HealthInfo { overall: health },
        group: GroupInfo { name: group.into() },
        ip_addresses: ips.iter().map(|s| s.to_string()).collect(),
        last_seen: Some(last_seen.into()),
    }
}

/// The 10-record sample fleet. Covers every OS/type/health bucket the
/// dashboard renders so the demo view exercises all the tiles.
pub fn sample_endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "mock-0001",
            "FINANCE-WS-01",
            "Windows 11 Pro",
            Some("23H2"),
            "computer",
            true,
            HealthState::Good,
            "Finance",
            &["10.20.1.11"],
            "2025-08-22T09:14:02.000Z",
        ),
        endpoint(
            "mock-0002",
            "FINANCE-WS-02",
            "Windows 10 Pro",
            Some("22H2"),
            "computer",
            false,
            HealthState::Warning,
            "Finance",
            &["10.20.1.12"],
            "2025-08-19T16:40:55.000Z",
        ),
        endpoint(
            "mock-0003",
            "ENG-MBP-07",
            "macOS Sonoma",
            Some("14.6"),
            "computer",
            true,
            HealthState::Good,
            "Engineering",
            &["10.20.2.31", "fe80::1c2a:44ff:fe8b:9901"],
            "2025-08-22T09:02:47.000Z",
        ),
        endpoint(
            "mock-0004",
            "ENG-UBU-12",
            "Ubuntu 22.04 LTS",
            Some("22.04.4"),
            "computer",
            true,
            HealthState::Good,
            "Engineering",
            &["10.20.2.44"],
            "2025-08-22T08:55:10.000Z",
        ),
        endpoint(
            "mock-0005",
            "DC-SRV-AD01",
            "Windows Server 2022",
            Some("21H2"),
            "server",
            true,
            HealthState::Good,
            "Datacenter",
            &["10.20.0.5", "2001:db8:20::5"],
            "2025-08-22T09:15:00.000Z",
        ),
        endpoint(
            "mock-0006",
            "DC-SRV-FILE02",
            "Windows Server 2019",
            Some("1809"),
            "server",
            true,
            HealthState::Critical,
            "Datacenter",
            &["10.20.0.8"],
            "2025-08-22T09:13:21.000Z",
        ),
        endpoint(
            "mock-0007",
            "DC-SRV-WEB03",
            "Ubuntu 24.04 LTS",
            Some("24.04"),
            "server",
            false,
            HealthState::Warning,
            "Datacenter",
            &["10.20.0.12", "2001:db8:20::12"],
            "2025-08-21T23:08:36.000Z",
        ),
        endpoint(
            "mock-0008",
            "SALES-IPH-22",
            "iOS",
            Some("17.5.1"),
            "mobile",
            true,
            HealthState::Good,
            "Sales",
            &["10.20.5.102"],
            "2025-08-22T08:47:18.000Z",
        ),
        endpoint(
            "mock-0009",
            "SALES-AND-09",
            "Android",
            Some("14"),
            "mobile",
            false,
            HealthState::Unknown,
            "Sales",
            &[],
            "2025-08-15T11:30:00.000Z",
        ),
        endpoint(
            "mock-0010",
            "RECEPTION-KIOSK",
            "Windows 10 IoT",
            None,
            "computer",
            true,
            HealthState::Warning,
            "No Group",
            &["10.20.7.2"],
            "2025-08-22T09:10:44.000Z",
        ),
    ]
}
