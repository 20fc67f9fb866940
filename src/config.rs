use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root folder holding one sub-folder per flight date.
    pub data_dir: String,
    /// Built dashboard assets; no static serving when unset.
    #[serde(default)]
    pub static_dir: Option<String>,
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    /// Bulk import only reads folders under this path; import is disabled when unset.
    #[serde(default)]
    pub import_root: Option<String>,
}

fn default_max_upload_mb() -> u64 {
    1024
}

impl StorageConfig {
    pub fn max_upload_bytes(&self) -> usize {
        (self.max_upload_mb as usize).saturating_mul(1024 * 1024)
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
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.storage.data_dir.is_empty(),
            "storage.data_dir must be non-empty"
        );
        anyhow::ensure!(
            self.storage
                .static_dir
                .as_deref()
                .is_none_or(|d| !d.is_empty()),
            "storage.static_dir must be non-empty when set"
        );
        anyhow::ensure!(
            self.storage
                .import_root
                .as_deref()
                .is_none_or(|d| !d.is_empty()),
            "storage.import_root must be non-empty when set"
        );
        anyhow::ensure!(
            self.storage.max_upload_mb > 0,
            "storage.max_upload_mb must be > 0, got {}",
            self.storage.max_upload_mb
        );
        Ok(())
    }
}
