//! Configuration management for steam-scout.
//!
//! Configuration is read from `~/.config/steam-scout/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;

pub use colors::ColorConfig;

use crate::extractor::SelectorConfig;
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable carrying the age-gate bypass token.
pub const BIRTHTIME_ENV: &str = "BIRTHTIME";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub paths: PathsConfig,
    pub selectors: SelectorConfig,
    pub colors: ColorConfig,
}

/// Where and how to talk to the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store origin; searches go to `<host>/search/?term=<keyword>`
    pub host: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Age-gate token sent as `birthtime=<token>`; `BIRTHTIME` overrides it
    pub birthtime: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "https://store.steampowered.com".to_string(),
            timeout_secs: 10,
            user_agent: concat!("steam-scout/", env!("CARGO_PKG_VERSION")).to_string(),
            birthtime: None,
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cookie header value for game page requests.
    pub fn bypass_cookie(&self) -> String {
        format!("birthtime={}", self.birthtime.as_deref().unwrap_or_default())
    }

    /// The bypass cookie must be sendable as a header value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        reqwest::header::HeaderValue::from_str(&self.bypass_cookie())
            .map(|_| ())
            .map_err(|e| ConfigError::Birthtime {
                token: self.birthtime.clone().unwrap_or_default(),
                message: e.to_string(),
            })
    }
}

/// Input and output locations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub tags_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tags_file: PathBuf::from("data/tags.json"),
            output_dir: PathBuf::from("resultfiles"),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default().with_env_overrides());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config.with_env_overrides())
    }

    /// Get the default config file path: `~/.config/steam-scout/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("steam-scout").join("config.toml"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var(BIRTHTIME_ENV) {
            self.store.birthtime = Some(token);
        }
        self
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %path.display(), "Wrote default configuration");
        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# steam-scout configuration
#
# Every key is optional; anything left out uses the built-in default.

[store]
host = "https://store.steampowered.com"

# Request timeout in seconds
timeout_secs = 10

# Age-gate token sent as a "birthtime" cookie on game pages.
# The BIRTHTIME environment variable takes precedence.
# birthtime = "470703601"

[paths]
# JSON object mapping tag IDs to tag names
tags_file = "data/tags.json"

# Where games.json and games.csv are written
output_dir = "resultfiles"

[colors]
# Named colors (Black, Red, DarkRed, Green, Yellow, Blue, Magenta, Cyan,
# Grey, DarkGrey, White, Reset, ...) or hex "#RRGGBB" / "#RGB"
banner = "Cyan"
prompt = "Reset"
heading = "Yellow"
success = "Green"
error = "Red"

# CSS selectors used to read store pages. Only change these if the store
# markup changes.
[selectors.listing]
row = "#search_resultsRows > a"
title = ".title"
price = ".col.search_price_discount_combined .discount_final_price"
release_date = ".search_released"
review_summary = ".search_review_summary"
review_attr = "data-tooltip-html"
review_separator = "<br>"
link_attr = "href"
tag_ids_attr = "data-ds-tagids"

[selectors.detail]
developer = "#developers_list > a"
# Tried in order; the labelled row scan below is the last resort
publisher = [
    "#game_highlights > div.rightcol > div > div.glance_ctn_responsive_left > div:nth-child(4) > div.summary.column > a",
]
info_row = ".dev_row"
info_row_label = ".subtitle"
info_row_value = ".summary a"
publisher_label = "Publisher"
description = ".game_description_snippet"
sysreq_section = ".game_page_autocollapse.sys_req"
sysreq_contents = ".sysreq_contents"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to parse tag catalog at {path}: {source}")]
    Catalog {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid birthtime token {token:?}: {message}")]
    Birthtime { token: String, message: String },

    #[error("Invalid selector {name} = {selector:?}: {message}")]
    Selector {
        name: String,
        selector: String,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        let defaults = Config::default();
        assert_eq!(config.store.host, defaults.store.host);
        assert_eq!(config.store.timeout_secs, 10);
        assert_eq!(config.paths.tags_file, PathBuf::from("data/tags.json"));
        assert_eq!(config.colors.banner, Color::Cyan);
        assert_eq!(config.selectors.listing.row, defaults.selectors.listing.row);
        assert_eq!(config.selectors.detail.publisher, defaults.selectors.detail.publisher);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[store]
timeout_secs = 3

[colors]
error = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.store.timeout(), Duration::from_secs(3));
        assert_eq!(config.store.host, "https://store.steampowered.com");
        assert_eq!(config.colors.error, Color::Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(config.colors.success, Color::Green);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.paths.output_dir, PathBuf::from("resultfiles"));
        assert!(config.store.birthtime.is_none());
    }

    #[test]
    fn test_bypass_cookie() {
        let mut store = StoreConfig::default();
        assert_eq!(store.bypass_cookie(), "birthtime=");
        store.birthtime = Some("470703601".into());
        assert_eq!(store.bypass_cookie(), "birthtime=470703601");
    }

    #[test]
    fn test_birthtime_with_control_characters_rejected() {
        let mut store = StoreConfig::default();
        assert!(store.validate().is_ok());

        store.birthtime = Some("470703601".into());
        assert!(store.validate().is_ok());

        store.birthtime = Some("4707\n03601".into());
        assert!(matches!(store.validate(), Err(ConfigError::Birthtime { .. })));
    }

    #[test]
    fn test_load_from_non_ascii_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[colors]\nerror = \"#aé123\"\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[store\nhost = 1").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
