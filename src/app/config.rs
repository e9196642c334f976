//! Application configuration
//!
//! Settings come from an optional TOML file, then environment overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const DEFAULT_SIGNUP_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:signUp";
const DEFAULT_LOGIN_URL: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword";
const DEFAULT_RECIPES_URL: &str =
    "https://ng-course-recipe-book-a4ef0-default-rtdb.europe-west1.firebasedatabase.app/recipes.json";

/// Application configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    pub api: ApiConfig,
    pub storage: StorageConfig,
}

/// Remote endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Key appended to identity provider requests
    pub api_key: String,
    pub signup_url: String,
    pub login_url: String,
    /// JSON document holding the recipe collection
    pub recipes_url: String,
    /// Per-request timeout; unset means requests wait indefinitely
    #[serde(with = "humantime_serde")]
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            recipes_url: DEFAULT_RECIPES_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn signup_url(&self) -> Result<Url> {
        parse_url("signup_url", &self.signup_url)
    }

    pub fn login_url(&self) -> Result<Url> {
        parse_url("login_url", &self.login_url)
    }

    pub fn recipes_url(&self) -> Result<Url> {
        parse_url("recipes_url", &self.recipes_url)
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).with_context(|| format!("Invalid {}: {:?}", field, value))
}

/// Local persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the blob store
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".recipebook"))
}

impl AppConfig {
    /// Load from `path` (if given) and apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env_vars();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply `RECIPEBOOK_*` environment overrides
    pub fn merge_env_vars(&mut self) {
        self.merge_env(|name| std::env::var(name).ok());
    }

    pub fn merge_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("RECIPEBOOK_API_KEY") {
            self.api.api_key = key;
        }
        if let Some(url) = lookup("RECIPEBOOK_RECIPES_URL") {
            self.api.recipes_url = url;
        }
        if let Some(dir) = lookup("RECIPEBOOK_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }
    }

    /// Check that every endpoint parses
    pub fn validate(&self) -> Result<()> {
        self.api.signup_url()?;
        self.api.login_url()?;
        self.api.recipes_url()?;
        Ok(())
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.storage.data_dir = dir;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,reqwest=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), "info");
        assert!(config.api.request_timeout.is_none());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipebook.toml");
        std::fs::write(
            &path,
            r#"
verbose = 1

[api]
api_key = "secret"
recipes_url = "http://localhost:9000/recipes.json"
request_timeout = "30s"

[storage]
data_dir = "/tmp/recipebook"
"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.verbose, 1);
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.api.recipes_url, "http://localhost:9000/recipes.json");
        assert_eq!(config.api.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(config.api.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/recipebook"));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("RECIPEBOOK_API_KEY", "from-env"),
            ("RECIPEBOOK_DATA_DIR", "/var/lib/recipebook"),
        ]);
        let mut config = AppConfig::default();
        config.merge_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.api.api_key, "from-env");
        assert_eq!(config.api.recipes_url, DEFAULT_RECIPES_URL);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/recipebook"));
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let mut config = AppConfig::default();
        config.api.recipes_url = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("recipes_url"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::load(Some(Path::new("/nonexistent/recipebook.toml"))).is_err());
    }
}
