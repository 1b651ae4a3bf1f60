// Vendor API credentials (secrets file schema)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of the secrets file. `Debug` redacts the secret so the struct is
/// safe to pass to tracing.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    /// Geographic API deployment selector ("us01", "eu01", "ap01", ...).
    pub region: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("region", &self.region)
            .finish()
    }
}
