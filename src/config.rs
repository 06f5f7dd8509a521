use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

fn default_backend() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout() -> String {
    "30s".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the execution backend.
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Per-call timeout, humantime syntax (`"30s"`, `"2m"`).
    #[serde(default = "default_timeout")]
    pub timeout: String,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Default filter; `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            timeout: default_timeout(),
            log_file: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// `<config_dir>/litepost/config.toml`
    pub fn default_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("litepost").join("config.toml")
    }

    /// Load from `path`; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }

    pub fn backend_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.backend).map_err(|source| ConfigError::BackendUrl {
            url: self.backend.clone(),
            source,
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::BackendScheme(self.backend.clone()));
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(&self.timeout).map_err(|source| ConfigError::Timeout {
            value: self.timeout.clone(),
            source,
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            base.join("litepost").join("litepost.log")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.backend, "http://localhost:8080");
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(30));
        assert_eq!(config.log_level, "info");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend = \"http://10.0.0.2:9000/litepost\"\ntimeout = \"2m\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.backend_url().unwrap().as_str(), "http://10.0.0.2:9000/litepost");
        assert_eq!(config.timeout().unwrap(), Duration::from_secs(120));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "backend = [").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn backend_url_must_be_http_base() {
        let mut config = AppConfig::default();
        config.backend = "mailto:someone@example.com".into();
        assert!(matches!(config.backend_url(), Err(ConfigError::BackendScheme(_))));
        config.backend = "not a url".into();
        assert!(matches!(config.backend_url(), Err(ConfigError::BackendUrl { .. })));
    }

    #[test]
    fn bad_timeout_is_reported() {
        let config = AppConfig { timeout: "soon".into(), ..Default::default() };
        assert!(matches!(config.timeout(), Err(ConfigError::Timeout { .. })));
    }

    #[test]
    fn explicit_log_file_wins() {
        let config = AppConfig { log_file: Some(PathBuf::from("/tmp/lp.log")), ..Default::default() };
        assert_eq!(config.log_path(), PathBuf::from("/tmp/lp.log"));
    }
}
