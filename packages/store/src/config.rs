//! # Application configuration: `greenguide.toml`
//!
//! Defines the TOML configuration the web app is built with (filename:
//! [`GreenGuideConfig::filename`] = `"greenguide.toml"`). It tells the client
//! where the REST backend lives and how long to wait for it.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"   # backend origin, no trailing slash needed
//! timeout_secs = 30                    # native builds only; browsers use fetch defaults
//! ```
//!
//! All structs derive `Default` so a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `greenguide.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GreenGuideConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GreenGuideConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..ApiConfig::default()
            },
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// Replace the backend origin when an override is given and non-empty.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Self {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "greenguide.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = GreenGuideConfig::from_toml("").unwrap();
        assert_eq!(config, GreenGuideConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = GreenGuideConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.greenguide.example"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.greenguide.example");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = GreenGuideConfig::new("http://10.0.0.2:8000").with_timeout(5);
        let text = config.to_toml().unwrap();
        assert!(text.contains("[api]"));
        assert_eq!(GreenGuideConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = GreenGuideConfig::default();

        let same = config.clone().with_base_url_override(None);
        assert_eq!(same, config);

        let blank = config.clone().with_base_url_override(Some("  "));
        assert_eq!(blank, config);

        let changed = config.with_base_url_override(Some("https://prod.example"));
        assert_eq!(changed.api.base_url, "https://prod.example");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(GreenGuideConfig::from_toml("[api\nbase_url = ").is_err());
    }
}
