use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

pub const DEFAULT_MANIFEST_URL: &str = "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/champion-summary.json";
pub const DEFAULT_ASSET_BASE_URL: &str = "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/champion-icons/";
pub const DEFAULT_OUTPUT_DIR: &str = "champion_icons";
pub const DEFAULT_PASSWORD_ENV: &str = "CHAMPSYNC_DB_PASSWORD";

/// Connection parameters for the champion catalog (optional `[database]` section).
///
/// The password is never stored here; it is read at connect time from the
/// environment variable named by `password_env`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    /// Name of the environment variable holding the password.
    pub password_env: String,
    /// Refuse unencrypted connections (hosted Postgres usually requires TLS).
    pub require_tls: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            user: "postgres".to_string(),
            password_env: DEFAULT_PASSWORD_ENV.to_string(),
            require_tls: true,
        }
    }
}

impl DatabaseConfig {
    /// Read the password from the configured environment variable.
    pub fn password(&self) -> Result<String> {
        std::env::var(&self.password_env).with_context(|| {
            format!(
                "database password not set: export {} before running catalog commands",
                self.password_env
            )
        })
    }
}

/// Global configuration loaded from `~/.config/champsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampsyncConfig {
    /// JSON list of champions (`[{"id": .., "name": ..}, ..]`).
    pub manifest_url: String,
    /// Icons are fetched from `<asset_base_url><id>.png`.
    pub asset_base_url: String,
    /// Directory icons are written to (relative paths resolve against the working directory).
    pub output_dir: PathBuf,
    /// Connect timeout per request, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Total timeout per request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub database: DatabaseConfig,
}

fn default_connect_timeout_secs() -> u64 {
    15
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ChampsyncConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            database: DatabaseConfig::default(),
        }
    }
}

impl ChampsyncConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchOptions::default()
        }
    }

    /// Reject endpoints that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        validate_http_url("manifest_url", &self.manifest_url)?;
        validate_http_url("asset_base_url", &self.asset_base_url)?;
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value).with_context(|| format!("{} is not a URL: {}", field, value))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{} must be http or https, got {}", field, other),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("champsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChampsyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ChampsyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ChampsyncConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
