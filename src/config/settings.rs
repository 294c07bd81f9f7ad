//! Settings structures for the search client

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Main settings structure matching aisearch.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    pub client: ClientSettings,
    pub ui: UiSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Merge with environment variables (AISEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("AISEARCH_BACKEND_URL") {
            if !val.trim().is_empty() {
                self.backend.base_url = val;
            }
        }
        if let Some(val) = var("AISEARCH_DEBOUNCE_MS") {
            if let Ok(ms) = val.parse() {
                self.client.debounce_ms = ms;
            }
        }
        if let Some(val) = var("AISEARCH_REQUEST_TIMEOUT") {
            if let Ok(secs) = val.parse() {
                self.backend.request_timeout = Some(secs);
            }
        }
    }

    /// Check that values are usable
    pub fn validate(&self) -> Result<()> {
        self.backend.url()?;
        if let Some(timeout) = self.backend.request_timeout {
            anyhow::ensure!(
                timeout > 0.0 && Duration::try_from_secs_f64(timeout).is_ok(),
                "backend.request_timeout must be a positive number of seconds"
            );
        }
        Ok(())
    }
}

/// Search backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Base URL of the search API
    pub base_url: String,
    /// Request timeout in seconds (none = transport default)
    pub request_timeout: Option<f64>,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: crate::DEFAULT_BACKEND_URL.to_string(),
            request_timeout: None,
            user_agent: format!("aisearch/{}", crate::VERSION),
        }
    }
}

impl BackendSettings {
    /// Parsed base URL
    pub fn url(&self) -> Result<Url> {
        Url::parse(self.base_url.trim())
            .with_context(|| format!("invalid backend.base_url '{}'", self.base_url))
    }

    /// Request timeout, if one is configured
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

/// Query dispatch behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Quiet period before a typed query is searched
    pub debounce_ms: u64,
    /// Page number sent with every search
    pub page: u32,
    /// Drop search/suggestion responses that were overtaken by a newer request
    pub discard_stale_responses: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            debounce_ms: crate::DEFAULT_DEBOUNCE_MS,
            page: 1,
            discard_stale_responses: true,
        }
    }
}

impl ClientSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Output format for rendered views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
}

impl std::str::FromStr for RenderFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => anyhow::bail!("unknown format '{}'", other),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Render format
    pub format: RenderFormat,
    /// Number of placeholder rows shown while loading
    pub skeleton_rows: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            format: RenderFormat::Text,
            skeleton_rows: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend.base_url, "http://localhost:8001");
        assert_eq!(settings.client.debounce_ms, 300);
        assert_eq!(settings.client.page, 1);
        assert!(settings.client.discard_stale_responses);
        assert!(settings.backend.timeout().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = Settings::from_yaml(
            "backend:\n  base_url: https://search.example.com\nui:\n  format: html\n",
        )
        .unwrap();
        assert_eq!(settings.backend.base_url, "https://search.example.com");
        assert_eq!(settings.client.debounce_ms, 300);
        assert_eq!(settings.ui.format, RenderFormat::Html);
        assert_eq!(settings.ui.skeleton_rows, 5);
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(Settings::from_yaml("backend:\n  base_url: not a url\n").is_err());
    }

    #[test]
    fn test_out_of_range_timeout_rejected() {
        for yaml in [
            "backend:\n  request_timeout: 1.0e20\n",
            "backend:\n  request_timeout: 0\n",
            "backend:\n  request_timeout: -3\n",
            "backend:\n  request_timeout: .inf\n",
        ] {
            assert!(Settings::from_yaml(yaml).is_err(), "{}", yaml);
        }

        let backend = BackendSettings {
            request_timeout: Some(1.0e20),
            ..Default::default()
        };
        assert!(backend.timeout().is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AISEARCH_BACKEND_URL", "http://10.0.0.2:9000"),
            ("AISEARCH_DEBOUNCE_MS", "150"),
            ("AISEARCH_REQUEST_TIMEOUT", "2.5"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(settings.backend.base_url, "http://10.0.0.2:9000");
        assert_eq!(settings.client.debounce_ms, 150);
        assert_eq!(settings.backend.timeout(), Some(Duration::from_millis(2500)));
    }

    #[test]
    fn test_blank_env_url_ignored() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| (key == "AISEARCH_BACKEND_URL").then(|| "  ".to_string()));
        assert_eq!(settings.backend.base_url, "http://localhost:8001");
    }

    #[test]
    fn test_render_format_parse() {
        assert_eq!("HTML".parse::<RenderFormat>().unwrap(), RenderFormat::Html);
        assert_eq!("txt".parse::<RenderFormat>().unwrap(), RenderFormat::Text);
        assert!("pdf".parse::<RenderFormat>().is_err());
    }
}
