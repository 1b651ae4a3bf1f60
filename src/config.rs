use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub vendor: VendorConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VendorConfig {
    /// Serve the fixed sample set unconditionally (demo mode). Read once at
    /// startup and injected into the inventory service.
    #[serde(default)]
    pub force_mock: bool,
    /// Vendor region code selecting the API base URL.
    #[serde(default = "default_region")]
    pub region: String,
    /// Override for the secrets/cache directory (defaults to the per-user
    /// application-data directory).
    #[serde(default)]
    pub secrets_dir: Option<String>,
}

fn default_region() -> String {
    "us01".into()
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            force_mock: false,
            region: default_region(),
            secrets_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.vendor.region.is_empty(),
            "vendor.region must be non-empty"
        );
        anyhow::ensure!(
            self.vendor
                .region
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "vendor.region must be a lowercase region code (e.g. \"us01\"), got {:?}",
            self.vendor.region
        );
        if let Some(dir) = &self.vendor.secrets_dir {
            anyhow::ensure!(!dir.is_empty(), "vendor.secrets_dir must be non-empty when set");
        }
        Ok(())
    }
}
