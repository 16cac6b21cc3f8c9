use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "hours-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursConfig {
    /// Base URL of the entries API, e.g. "http://localhost:5000"
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Anti-forgery token. Read from the index page when not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,

    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    /// Suffix appended to money amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_csrf_header() -> String {
    hours_client::DEFAULT_CSRF_HEADER.to_string()
}

fn default_hourly_rate() -> f64 {
    14.0
}

fn default_currency() -> String {
    "₪".to_string()
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            csrf_token: None,
            csrf_header: default_csrf_header(),
            hourly_rate: default_hourly_rate(),
            currency: default_currency(),
        }
    }
}

impl HoursConfig {
    fn app_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("hours-tui.log"))
    }

    /// Load config from disk, overridden by `HOURS_*` environment variables.
    /// Missing file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).required(false))
            .add_source(
                config::Environment::with_prefix("HOURS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize::<Self>()
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Write a default config file unless one exists. Returns the path.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = HoursConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.api_url, "http://localhost:5000");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.hourly_rate, 14.0);
        assert_eq!(config.csrf_token, None);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_url = \"https://hours.example.com\"\ncsrf_token = \"abc\"\n",
        )
        .unwrap();

        let config = HoursConfig::load_from(&path).unwrap();
        assert_eq!(config.api_url, "https://hours.example.com");
        assert_eq!(config.csrf_token.as_deref(), Some("abc"));
        assert_eq!(config.currency, "₪");
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = HoursConfig {
            hourly_rate: 20.5,
            currency: "EUR".to_string(),
            ..HoursConfig::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(HoursConfig::load_from(&path).unwrap(), config);
    }
}
