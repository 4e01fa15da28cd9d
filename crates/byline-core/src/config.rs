//! Configuration management for byline.
//!
//! Loads configuration from ${BYLINE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub mod paths {
    //! Path resolution for byline configuration and data directories.
    //!
    //! BYLINE_HOME resolution order:
    //! 1. BYLINE_HOME environment variable (if set)
    //! 2. ~/.config/byline (default)

    use std::path::PathBuf;

    /// Returns the byline home directory.
    ///
    /// Checks BYLINE_HOME env var first, falls back to ~/.config/byline
    pub fn byline_home() -> PathBuf {
        if let Ok(home) = std::env::var("BYLINE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("byline"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        byline_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        byline_home().join("session.json")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        byline_home().join("logs")
    }
}

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the blog API.
    pub base_url: String,
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Resolves the effective API base URL.
    ///
    /// Precedence: explicit override (CLI flag) > BYLINE_API_URL env > config
    /// value. The result is validated and stripped of any trailing slash.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> Result<String> {
        if let Some(flag) = override_url {
            let trimmed = flag.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        if let Ok(env_url) = std::env::var("BYLINE_API_URL") {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        let trimmed = self.base_url.trim();
        validate_url(trimmed)?;
        Ok(trimmed.trim_end_matches('/').to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid API base URL: {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    /// Config loading: missing file returns defaults.
    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
    }

    /// Config loading: values read from file.
    #[test]
    fn test_load_reads_base_url() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "base_url = \"https://blog.example.com/api\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, "https://blog.example.com/api");
    }

    /// Config init: creates file with template, creates parent dirs.
    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# byline configuration"));
        assert!(contents.contains("base_url"));
    }

    /// Config init: fails if file exists (no silent overwrite).
    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        let result = Config::init(&config_path);
        assert!(result.is_err());
    }

    /// Base URL: flag override wins over config value.
    #[test]
    fn test_resolve_base_url_flag_wins() {
        let config = Config {
            base_url: "http://config.example/api".to_string(),
        };
        let url = config
            .resolve_base_url(Some("http://flag.example/api"))
            .unwrap();
        assert_eq!(url, "http://flag.example/api");
    }

    /// Base URL: trailing slash is stripped.
    #[test]
    fn test_resolve_base_url_strips_trailing_slash() {
        let config = Config::default();
        let url = config
            .resolve_base_url(Some("http://flag.example/api/"))
            .unwrap();
        assert_eq!(url, "http://flag.example/api");
    }

    /// Base URL: malformed values are rejected.
    #[test]
    fn test_resolve_base_url_rejects_invalid() {
        let config = Config {
            base_url: "not a url".to_string(),
        };
        assert!(config.resolve_base_url(None).is_err());
    }
}
