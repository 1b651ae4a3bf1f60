// Domain models (canonical endpoint shape + vendor wire shapes)

mod credentials;
mod endpoint;
mod filter;
mod raw;
mod stats;

pub use credentials::Credentials;
pub use endpoint::{Endpoint, GroupInfo, HealthInfo, HealthState, OsInfo};
pub use filter::EndpointFilter;
pub use raw::{InventoryPage, PageInfo, RawEndpoint, TokenResponse};
pub use stats::{DashboardStats, HealthCounts, compute_stats};
