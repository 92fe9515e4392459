//! Configuration management for the CLI
//!
//! Settings come from an optional file and `XSTATS_*` environment variables;
//! command-line flags take precedence over both.

use anyhow::{Context, Result};
use serde::Deserialize;
use stats_lib::ClientConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Settings {
    /// Stats API server address
    #[serde(default)]
    pub server: Option<String>,
    /// Directory results are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Connect with TLS
    #[serde(default)]
    pub tls: bool,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from `path` (if given) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(config::Environment::with_prefix("XSTATS"))
            .build()
            .context("Failed to read settings")?;

        config
            .try_deserialize()
            .context("Failed to parse settings")
    }

    /// Server address from the flag, falling back to settings
    pub fn server(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| self.server.clone())
            .filter(|server| !server.is_empty())
            .context("No server address: pass --server or set XSTATS_SERVER")
    }

    /// Output directory from the flag, falling back to settings, then `.`
    pub fn output_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Transport options with flags overriding settings
    pub fn client_config(
        &self,
        tls: bool,
        connect_timeout_secs: Option<u64>,
        request_timeout_secs: Option<u64>,
    ) -> ClientConfig {
        let mut config = ClientConfig::insecure().with_tls(tls || self.tls);
        if let Some(secs) = connect_timeout_secs.or(self.connect_timeout_secs) {
            config = config.with_connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = request_timeout_secs.or(self.request_timeout_secs) {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("xstats.toml");
        std::fs::write(
            &path,
            "server = \"127.0.0.1:10085\"\noutput_dir = \"/tmp/stats\"\ntls = true\nconnect_timeout_secs = 5\n",
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();

        assert_eq!(settings.server.as_deref(), Some("127.0.0.1:10085"));
        assert_eq!(settings.output_dir, Some(PathBuf::from("/tmp/stats")));
        assert!(settings.tls);
        assert_eq!(settings.connect_timeout_secs, Some(5));
        assert_eq!(settings.request_timeout_secs, None);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.toml");

        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_flag_overrides_settings() {
        let settings = Settings {
            server: Some("10.0.0.1:10085".to_string()),
            output_dir: Some(PathBuf::from("/var/lib/xstats")),
            ..Default::default()
        };

        assert_eq!(
            settings.server(Some("127.0.0.1:1".to_string())).unwrap(),
            "127.0.0.1:1"
        );
        assert_eq!(settings.server(None).unwrap(), "10.0.0.1:10085");
        assert_eq!(
            settings.output_dir(Some(PathBuf::from("out"))),
            PathBuf::from("out")
        );
        assert_eq!(settings.output_dir(None), PathBuf::from("/var/lib/xstats"));
    }

    #[test]
    fn test_missing_server_is_an_error() {
        let settings = Settings::default();
        assert!(settings.server(None).is_err());
        assert!(settings.server(Some(String::new())).is_err());
        assert_eq!(settings.output_dir(None), PathBuf::from("."));
    }

    #[test]
    fn test_client_config_defaults_to_insecure() {
        let config = Settings::default().client_config(false, None, None);
        assert_eq!(config, ClientConfig::insecure());
    }

    #[test]
    fn test_client_config_merges_flags_and_settings() {
        let settings = Settings {
            tls: true,
            connect_timeout_secs: Some(3),
            request_timeout_secs: Some(30),
            ..Default::default()
        };

        let config = settings.client_config(false, Some(1), None);

        assert!(config.tls);
        assert_eq!(config.connect_timeout, Some(Duration::from_secs(1)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
    }
}
