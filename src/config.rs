//! Application configuration.

use crate::consts::cli_consts::DEFAULT_DATE_FORMAT;
use crate::consts::cli_consts::backend::{API_URL_ENV, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Directory under the home directory holding config and log files.
const CONFIG_DIR: &str = ".wheel-admin";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "wheel-admin.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the admin API.
    pub api_url: String,

    /// chrono pattern for timestamps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl Config {
    /// Create Config with the given API URL.
    pub fn new(api_url: String) -> Self {
        Config {
            api_url,
            date_format: None,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration at `path` if there is one.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, std::io::Error> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Remove the configuration file.
    ///
    /// Returns whether a file was removed.
    pub fn clear(path: &Path) -> Result<bool, std::io::Error> {
        if !path.ends_with(CONFIG_FILE) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Path must end with {}", CONFIG_FILE),
            ));
        }

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}

fn config_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine the home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR))
}

/// `~/.wheel-admin/config.json`
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// `~/.wheel-admin/wheel-admin.log`
pub fn get_log_path() -> Result<PathBuf, std::io::Error> {
    Ok(config_dir()?.join(LOG_FILE))
}

/// Pick the API URL: command-line flag, then environment, then config file,
/// then the default.
pub fn resolve_api_url(
    flag: Option<&str>,
    env: Option<&str>,
    config: Option<&Config>,
) -> String {
    let candidates = [flag, env, config.map(|config| config.api_url.as_str())];
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .to_string()
}

/// The API URL from the `WHEEL_ADMIN_API_URL` environment variable.
pub fn api_url_from_env() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::new("http://admin.example:3150".to_string());
        config.date_format = Some("%Y-%m-%d".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
        assert_eq!(loaded_config.date_format(), "%Y-%m-%d");
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:3150".to_string());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::new("http://first:3150".to_string())
            .save(&path)
            .unwrap();
        let config2 = Config::new("http://second:3150".to_string());
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // A file without a date format falls back to the default pattern.
    fn test_date_format_is_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"api_url": "http://localhost:3150"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.date_format(), DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_optional(&path).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("http://localhost:3150".to_string())
            .save(&path)
            .unwrap();

        assert!(Config::clear(&path).unwrap());
        assert!(!path.exists());
        assert!(!Config::clear(&path).unwrap());
    }

    #[test]
    fn test_clear_refuses_other_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        assert!(Config::clear(&path).is_err());
    }

    #[test]
    fn test_api_url_precedence() {
        let config = Config::new("http://from-file:1".to_string());

        assert_eq!(
            resolve_api_url(Some("http://flag:1"), Some("http://env:1"), Some(&config)),
            "http://flag:1"
        );
        assert_eq!(
            resolve_api_url(None, Some("http://env:1"), Some(&config)),
            "http://env:1"
        );
        assert_eq!(resolve_api_url(None, Some(" "), Some(&config)), "http://from-file:1");
        assert_eq!(resolve_api_url(None, None, None), DEFAULT_API_URL);
    }
}
