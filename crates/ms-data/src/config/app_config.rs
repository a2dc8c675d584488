//! Application configuration

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{DataError, DataResult};

/// Environment variable naming an alternate config file
pub const CONFIG_ENV: &str = "MEDSYM_CONFIG";

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "medsymposium.json";

fn default_data_dir() -> PathBuf {
    PathBuf::from(".medsymposium")
}

fn default_login_delay_ms() -> u64 {
    1500
}

/// Settings read at startup
///
/// Every field has a default, so an absent or partial file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Directory holding `preferences.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// JSON catalog to load instead of the built-in fixture
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Simulated sign-in delay
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_path: None,
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Parse a config file
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DataError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Config from `$MEDSYM_CONFIG`, else `./medsymposium.json`, else defaults
    pub fn discover() -> DataResult<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            let path = PathBuf::from(path);
            info!(path = ?path, "Loading config from {}", CONFIG_ENV);
            return Self::load(&path);
        }

        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            info!(path = ?local, "Loading config");
            return Self::load(&local);
        }

        Ok(Self::default())
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "login_delay_ms": 10 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.login_delay(), Duration::from_millis(10));
        assert_eq!(config.data_dir, default_data_dir());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "login_delay_ms": "soon" }"#).unwrap();

        assert!(matches!(AppConfig::load(&path), Err(DataError::Config(_))));
    }
}
