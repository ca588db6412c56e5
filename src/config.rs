//! Configuration for the Twitter application credentials
//!
//! Loads configuration from config.yml file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Template embedded in configuration errors so users can create the file.
pub const CONFIG_TEMPLATE: &str = "app:
  key: YOUR_CONSUMER_KEY
  secret: YOUR_CONSUMER_SECRET
  save_directory: /path/to/image/backups
";

/// YAML config structures
#[derive(Debug, Deserialize)]
struct YamlConfig {
    app: Option<AppSection>,
}

#[derive(Debug, Deserialize)]
struct AppSection {
    key: Option<String>,
    secret: Option<String>,
    save_directory: Option<String>,
}

/// Main configuration struct
#[derive(Debug, Clone)]
pub struct Config {
    pub key: String,
    pub secret: String,
    pub save_directory: PathBuf,
}

impl Config {
    /// Resolve a value: prefer env var if config value looks like ${VAR}
    fn resolve_env_string(value: Option<String>, env_key: &str) -> String {
        // If value from YAML looks like ${...}, try env var
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = std::env::var(var_name) {
                    return env_val;
                }
            }
        }
        // Also check explicit env_key as fallback
        if let Ok(env_val) = std::env::var(env_key) {
            return env_val;
        }
        value.unwrap_or_default()
    }

    /// Load .env file into environment variables using dotenvy
    fn load_dotenv() {
        // Try to load from current directory first, then parent
        if dotenvy::dotenv().is_err() {
            let _ = dotenvy::from_filename("../.env");
        }
    }

    /// Reject values that were never filled in.
    fn require(value: String, name: &str) -> Result<String> {
        if value.is_empty() || value == "default" {
            return Err(Error::Config(format!(
                "'{}' is not set; fill in the config file like this:\n{}",
                name, CONFIG_TEMPLATE
            )));
        }
        Ok(value)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        // Load .env file first
        Self::load_dotenv();

        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file {}: {}\nExpected format:\n{}",
                path.as_ref().display(),
                e,
                CONFIG_TEMPLATE
            ))
        })?;

        let yaml: YamlConfig = serde_yaml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file: {}\nExpected format:\n{}",
                e, CONFIG_TEMPLATE
            ))
        })?;

        let app = yaml.app.ok_or_else(|| {
            Error::Config(format!(
                "Missing 'app' section in config file\nExpected format:\n{}",
                CONFIG_TEMPLATE
            ))
        })?;

        // Resolve values with env var precedence
        let key = Self::resolve_env_string(app.key, "TWITTER_CONSUMER_KEY");
        let secret = Self::resolve_env_string(app.secret, "TWITTER_CONSUMER_SECRET");
        let save_directory = Self::resolve_env_string(app.save_directory, "TWITTER_SAVE_DIRECTORY");

        Ok(Self {
            key: Self::require(key, "key")?,
            secret: Self::require(secret, "secret")?,
            save_directory: PathBuf::from(Self::require(save_directory, "save_directory")?),
        })
    }
}
