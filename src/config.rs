//! Runtime configuration
//!
//! Values come from, in order of precedence: command-line flags (or their
//! environment variables), a YAML config file, then the defaults in
//! [`crate::constants`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Deserialize;

use crate::constants::{
    APP_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_API_URL, DEFAULT_LOG_FILE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_TOAST_SECS,
};

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = APP_NAME, version, about = "Manage users of a REST user collection")]
pub struct Cli {
    /// URL of the users collection, e.g. http://localhost:3000/users
    #[arg(long, env = "ROSTER_API_URL")]
    pub api_url: Option<String>,

    /// Path to a YAML config file
    #[arg(long, env = "ROSTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Where to write the log
    #[arg(long, env = "ROSTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Shape of the YAML config file; every key is optional
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub toast_secs: Option<u64>,
}

impl FileConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub log_file: PathBuf,
    pub request_timeout: Duration,
    pub toast_ttl: chrono::Duration,
}

/// `<config dir>/roster/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl Config {
    /// Resolve the configuration for `cli`
    pub fn load(cli: Cli) -> Result<Self> {
        let file = match &cli.config {
            // An explicit path has to exist
            Some(path) => FileConfig::from_path(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => FileConfig::from_path(&path)?,
                _ => FileConfig::default(),
            },
        };
        Self::merge(cli, file)
    }

    pub fn merge(cli: Cli, file: FileConfig) -> Result<Self> {
        let api_url = cli
            .api_url
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        validate_api_url(&api_url)?;

        let timeout_secs = cli
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            bail!("Request timeout must be at least one second");
        }

        let toast_secs = file.toast_secs.unwrap_or(DEFAULT_TOAST_SECS);

        Ok(Config {
            api_url,
            log_file: cli
                .log_file
                .or(file.log_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            request_timeout: Duration::from_secs(timeout_secs),
            toast_ttl: chrono::Duration::seconds(toast_secs as i64),
        })
    }
}

fn validate_api_url(raw: &str) -> Result<()> {
    let url = reqwest::Url::parse(raw).with_context(|| format!("Invalid API URL '{}'", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => bail!("API URL must use http or https, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::merge(Cli::default(), FileConfig::default()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.toast_ttl, chrono::Duration::seconds(DEFAULT_TOAST_SECS as i64));
        assert_eq!(config.log_file, PathBuf::from(DEFAULT_LOG_FILE));
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = Cli {
            api_url: Some("https://api.example.com/users".into()),
            ..Cli::default()
        };
        let file = FileConfig {
            api_url: Some("http://file.example.com/users".into()),
            timeout_secs: Some(10),
            ..FileConfig::default()
        };
        let config = Config::merge(cli, file).unwrap();
        assert_eq!(config.api_url, "https://api.example.com/users");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_rejects_bad_urls() {
        for bad in ["not a url", "ftp://example.com/users"] {
            let cli = Cli {
                api_url: Some(bad.into()),
                ..Cli::default()
            };
            assert!(Config::merge(cli, FileConfig::default()).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let cli = Cli {
            timeout_secs: Some(0),
            ..Cli::default()
        };
        assert!(Config::merge(cli, FileConfig::default()).is_err());
    }

    #[test]
    fn test_load_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "api_url: https://mock.example.com/users\ntoast_secs: 2\nlog_file: /tmp/roster-test.log\n",
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        let config = Config::load(cli).unwrap();
        assert_eq!(config.api_url, "https://mock.example.com/users");
        assert_eq!(config.toast_ttl, chrono::Duration::seconds(2));
        assert_eq!(config.log_file, PathBuf::from("/tmp/roster-test.log"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("nope.yaml")),
            ..Cli::default()
        };
        assert!(Config::load(cli).is_err());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_urll: http://typo\n").unwrap();
        assert!(FileConfig::from_path(&path).is_err());
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["roster", "--api-url", "http://h/users", "--timeout-secs", "3"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://h/users"));
        assert_eq!(cli.timeout_secs, Some(3));
    }
}
