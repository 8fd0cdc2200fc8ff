//! # Directory configuration — `directory.toml`
//!
//! Defines the TOML file that tunes where records come from, how the list is
//! revealed, and where the theme preference is stored
//! (filename: [`DirectoryConfig::filename`] = `"directory.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! endpoint = "https://randomuser.me/api/"
//! batch_size = 18
//!
//! [view]
//! initial_visible = 9
//! load_more_step = 3
//! load_more_delay_ms = 1000
//!
//! [theme]
//! storage_key = "darkMode"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DirectoryConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`SourceConfig`] | Endpoint and batch size requested from the directory source. |
//! | [`ViewConfig`] | Initial window, reveal step and artificial reveal delay. |
//! | [`ThemeConfig`] | Storage key of the persisted dark-mode flag. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `directory.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Where records are fetched from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Number of records requested in the single fetch.
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_endpoint() -> String {
    "https://randomuser.me/api/".to_string()
}

fn default_batch_size() -> usize {
    18
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            batch_size: default_batch_size(),
        }
    }
}

/// Pagination of the rendered list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_initial_visible")]
    pub initial_visible: usize,
    #[serde(default = "default_load_more_step")]
    pub load_more_step: usize,
    /// Delay before a load-more reveal completes, in milliseconds.
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u32,
}

fn default_initial_visible() -> usize {
    9
}

fn default_load_more_step() -> usize {
    3
}

fn default_load_more_delay_ms() -> u32 {
    1000
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            initial_visible: default_initial_visible(),
            load_more_step: default_load_more_step(),
            load_more_delay_ms: default_load_more_delay_ms(),
        }
    }
}

/// Persisted theme preference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "darkMode".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl DirectoryConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "directory.toml"
    }

    /// Builder method to point at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.source.endpoint = endpoint.into();
        self
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
        let config = DirectoryConfig::from_toml("").unwrap();
        assert_eq!(config, DirectoryConfig::default());
        assert_eq!(config.source.batch_size, 18);
        assert_eq!(config.view.initial_visible, 9);
        assert_eq!(config.view.load_more_step, 3);
        assert_eq!(config.view.load_more_delay_ms, 1000);
        assert_eq!(config.theme.storage_key, "darkMode");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = DirectoryConfig::from_toml("[view]\nload_more_step = 6\n").unwrap();
        assert_eq!(config.view.load_more_step, 6);
        assert_eq!(config.view.initial_visible, 9);
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DirectoryConfig::default().with_endpoint("http://localhost:9000/api/");
        let text = config.to_toml().unwrap();
        assert!(text.contains("localhost:9000"));
        assert_eq!(DirectoryConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(DirectoryConfig::from_toml("[view]\ninitial_visible = \"nine\"").is_err());
    }
}
