//! Application configuration for NomadPlan.
//!
//! User config lives at `~/.nomadplan/nomadplan.toml`.
//! CLI flags override the `NOMADPLAN_API_URL` environment variable, which
//! overrides config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{NomadError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "nomadplan.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".nomadplan";

/// Log file written by the TUI (it cannot log to the terminal it draws on).
const LOG_FILE_NAME: &str = "nomadplan-tui.log";

/// Environment variable that overrides `api.base_url`.
pub const API_URL_ENV: &str = "NOMADPLAN_API_URL";

// ---------------------------------------------------------------------------
// Config structs (matching nomadplan.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// View defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000/api".into()
}
fn default_timeout_secs() -> u64 {
    10
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Initial sort key on the destinations view.
    #[serde(default = "default_sort")]
    pub destination_sort: String,

    /// Initial sort key on the coworking view.
    #[serde(default = "default_sort")]
    pub coworking_sort: String,

    /// User whose trips and profile are shown.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            destination_sort: default_sort(),
            coworking_sort: default_sort(),
            user_id: default_user_id(),
        }
    }
}

fn default_sort() -> String {
    "rating".into()
}
fn default_user_id() -> String {
    "user1".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.nomadplan/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| NomadError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.nomadplan/nomadplan.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Get the path to the TUI log file.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(LOG_FILE_NAME))
}

/// Load the application config from disk and apply environment overrides.
/// Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    let mut config = if path.exists() {
        load_config_from(&path)?
    } else {
        tracing::debug!(?path, "config file not found, using defaults");
        AppConfig::default()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| NomadError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| NomadError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_env_overrides_from(config, |key| std::env::var(key).ok());
}

/// Apply overrides using an arbitrary variable lookup.
pub fn apply_env_overrides_from(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        tracing::debug!(%url, "api.base_url overridden from environment");
        config.api.base_url = url;
    }
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| NomadError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content = toml::to_string_pretty(&config).map_err(|e| NomadError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| NomadError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Parse and check the configured API base URL.
pub fn validate_base_url(config: &AppConfig) -> Result<Url> {
    let raw = config.api.base_url.trim();
    let url = Url::parse(raw)
        .map_err(|e| NomadError::config(format!("invalid api.base_url '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NomadError::config(format!(
            "api.base_url must use http or https, got '{other}'"
        ))),
    }
}
