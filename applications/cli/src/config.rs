/// Application configuration
use crate::error::{AppError, Result};
use playlist_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "playlist-manager.toml";

/// Environment variables and the keys they override.
///
/// Mapped explicitly: splitting on `_` would break up `base_url` and friends.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PLM_API_BASE_URL", "api.base_url"),
    ("PLM_API_TIMEOUT_SECS", "api.timeout_secs"),
    ("PLM_STORAGE_STATE_FILE", "storage.state_file"),
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file holding persisted client state (the theme)
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, std::env::vars())
    }

    /// Load configuration using the given variables in place of the process
    /// environment.
    pub fn load_with_env<I>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut settings = config::Config::builder();

        match path {
            // An explicit path must exist
            Some(path) => settings = settings.add_source(config::File::from(path)),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        for (name, value) in vars {
            let Some(&(_, key)) = ENV_OVERRIDES.iter().find(|(var, _)| *var == name) else {
                continue;
            };
            settings = if key == "api.timeout_secs" {
                let secs: i64 = value.trim().parse().map_err(|_| {
                    AppError::Config(format!("{name} must be a whole number of seconds"))
                })?;
                settings.set_override(key, secs)?
            } else {
                settings.set_override(key, value)?
            };
        }

        settings.build()?.try_deserialize().map_err(AppError::from)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim().to_ascii_lowercase();
        if base_url.is_empty() {
            return Err(AppError::Config(
                "API base URL is required (set PLM_API_BASE_URL)".to_string(),
            ));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base URL must use http or https, got {:?}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(AppError::Config(
                "API timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.trim())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        state_file: default_state_file(),
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from("./data/playlist-manager.json")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("playlist-manager.toml");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_sources() {
        let config = AppConfig::load_with_env(None, no_env()).unwrap();

        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn file_values_fill_missing_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\nbase_url = \"https://music.example.com/api/\"\n");

        let config = AppConfig::load_with_env(Some(&path), no_env()).unwrap();

        assert_eq!(config.api.base_url, "https://music.example.com/api/");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.storage.state_file, default_state_file());
    }

    #[test]
    fn environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[api]\ntimeout_secs = 30\n");

        let config = AppConfig::load_with_env(
            Some(&path),
            env(&[
                ("PLM_API_TIMEOUT_SECS", "3"),
                ("PLM_STORAGE_STATE_FILE", "/tmp/state.json"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.storage.state_file, PathBuf::from("/tmp/state.json"));
        assert_eq!(config.client_config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        let result = AppConfig::load_with_env(None, env(&[("PLM_API_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(AppConfig::load_with_env(Some(&path), no_env()).is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.api.base_url = "ftp://example.com".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.base_url = "  ".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
