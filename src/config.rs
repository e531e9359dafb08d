//! User configuration, stored as `config.json` next to the persisted form state.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::util::persistence::config_dir;

const CONFIG_FILE: &str = "config.json";

pub const ENV_BACKEND_URL: &str = "ECOSPIRE_BACKEND_URL";
pub const ENV_OFFLINE: &str = "ECOSPIRE_OFFLINE";
pub const ENV_LOG: &str = "ECOSPIRE_LOG";

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration directory unavailable")]
    DirectoryUnavailable,
    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Remote analysis service. The estimator falls back to the local calculation
/// whenever it is disabled or unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub enabled: bool,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:5000/".to_string(),
            timeout_secs: 5,
        }
    }
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of [`LOG_LEVELS`].
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// Configuration read at startup.
#[derive(Debug)]
pub struct LoadedConfig {
    /// `config.json` as written, before environment overrides.
    pub stored: AppConfig,
    /// `stored` with environment overrides applied. This is what the app runs with.
    pub effective: AppConfig,
    /// Why `stored` fell back to the defaults, if it did.
    pub error: Option<ConfigError>,
}

impl AppConfig {
    /// Loads `config.json` from the platform config directory and applies
    /// environment overrides. Never fails: on error the defaults are used and
    /// the error is handed back so the caller can log it once logging is up.
    pub fn load() -> LoadedConfig {
        let path = config_dir().map(|dir| dir.join(CONFIG_FILE));
        Self::resolve(path.as_deref(), env_lookup)
    }

    /// `config.json` without environment overrides, for editing.
    pub fn load_stored() -> Result<Self, ConfigError> {
        let dir = config_dir().ok_or(ConfigError::DirectoryUnavailable)?;
        Self::load_from(&dir.join(CONFIG_FILE))
    }

    fn resolve<F>(path: Option<&Path>, lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let (stored, error) = match path
            .ok_or(ConfigError::DirectoryUnavailable)
            .and_then(Self::load_from)
        {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        };
        let mut effective = stored.clone();
        effective.apply_env_overrides(lookup);
        LoadedConfig {
            stored,
            effective,
            error,
        }
    }

    /// Applies the process environment on top of these values.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_env_overrides(env_lookup);
        self
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = ?path, "No configuration file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        debug!(path = ?path, "Configuration loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = config_dir()
            .ok_or(ConfigError::DirectoryUnavailable)?
            .join(CONFIG_FILE);
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = ?path, "Configuration saved");
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        url::Url::parse(&self.backend.base_url)?;
        Ok(())
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend.base_url = url.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_OFFLINE) {
            if is_truthy(&flag) {
                self.backend.enabled = false;
            }
        }
        if let Some(level) = lookup(ENV_LOG) {
            let level = level.trim().to_ascii_lowercase();
            if LOG_LEVELS.contains(&level.as_str()) {
                self.logging.level = level;
            }
        }
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("ecospire_config_{name}_{}", uuid::Uuid::new_v4()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.backend.enabled);
        assert_eq!(config.backend.base_url, "http://localhost:5000/");
        assert_eq!(config.backend.timeout(), Duration::from_secs(5));
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let config = AppConfig::load_from(&dir.join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, r#"{"backend":{"enabled":false}}"#).unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(!config.backend.enabled);
        assert_eq!(config.backend.timeout_secs, 5);
        assert_eq!(config.logging.level, "info");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("nested").join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.backend.base_url = "http://10.0.0.2:8080/".to_string();
        config.logging.level = "debug".to_string();

        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_url_is_rejected_on_save() {
        let dir = scratch_dir("invalid");
        let mut config = AppConfig::default();
        config.backend.base_url = "not a url".to_string();

        let err = config.save_to(&dir.join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
        assert!(!dir.exists());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_BACKEND_URL, " http://analysis.local/ "),
            (ENV_OFFLINE, "TRUE"),
            (ENV_LOG, "Debug"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.base_url, "http://analysis.local/");
        assert!(!config.backend.enabled);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_env_overrides_ignore_junk() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_BACKEND_URL, "  "), (ENV_OFFLINE, "0"), (ENV_LOG, "loud")]);
        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_corrupt_file_reports_error() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let loaded = AppConfig::resolve(Some(&path), |_| None);
        assert!(matches!(loaded.error, Some(ConfigError::Serde(_))));
        assert_eq!(loaded.stored, AppConfig::default());
        assert_eq!(loaded.effective, AppConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_directory_reports_error() {
        let vars: HashMap<&str, &str> = HashMap::from([(ENV_LOG, "warn")]);
        let loaded = AppConfig::resolve(None, |key| vars.get(key).map(|v| v.to_string()));

        assert!(matches!(loaded.error, Some(ConfigError::DirectoryUnavailable)));
        assert_eq!(loaded.effective.logging.level, "warn");
    }

    #[test]
    fn test_env_overrides_stay_out_of_stored_config() {
        let dir = scratch_dir("stored");
        let path = dir.join(CONFIG_FILE);
        let mut on_disk = AppConfig::default();
        on_disk.backend.base_url = "http://10.0.0.2:8080/".to_string();
        on_disk.save_to(&path).unwrap();

        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_OFFLINE, "1"),
            (ENV_BACKEND_URL, "http://override.local/"),
        ]);
        let loaded = AppConfig::resolve(Some(&path), |key| vars.get(key).map(|v| v.to_string()));

        assert!(loaded.error.is_none());
        assert_eq!(loaded.stored, on_disk);
        assert!(!loaded.effective.backend.enabled);
        assert_eq!(loaded.effective.backend.base_url, "http://override.local/");

        let _ = fs::remove_dir_all(&dir);
    }
}
