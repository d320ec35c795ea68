//! Blog Configuration
//!
//! Tunable constants, embedded from `assets/blog.toml`. Every field has a
//! default so a partial document is valid.

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{BlogError, Result};
use crate::models::CategoryColors;

const EMBEDDED_CONFIG: &str = include_str!("../assets/blog.toml");

/// Minimum number of distinct palette colors
pub const MIN_PALETTE_SIZE: usize = 8;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub fade: FadeConfig,
    #[serde(default)]
    pub litmus: LitmusConfig,
    #[serde(default)]
    pub categories: CategoryColors,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            search_placeholder: default_search_placeholder(),
        }
    }
}

fn default_title() -> String {
    "A Life I Do Not Deserve".to_string()
}

fn default_search_placeholder() -> String {
    "Search your soul...".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FadeConfig {
    #[serde(default = "default_fade_start")]
    pub start_fraction: f64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            start_fraction: default_fade_start(),
        }
    }
}

fn default_fade_start() -> f64 {
    leptos_scrollfade::DEFAULT_FADE_START
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LitmusConfig {
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_neutral_color")]
    pub neutral_color: String,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

impl Default for LitmusConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            neutral_color: default_neutral_color(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_palette() -> Vec<String> {
    [
        "red", "orange", "yellow", "green", "blue", "indigo", "pink", "dark-green",
    ]
    .iter()
    .map(|name| format!("var(--color-{})", name))
    .collect()
}

fn default_neutral_color() -> String {
    "var(--color-text-light)".to_string()
}

fn default_interval_ms() -> u32 {
    1000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_geolocation_url")]
    pub geolocation_url: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            geolocation_url: default_geolocation_url(),
            locale: default_locale(),
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_geolocation_url() -> String {
    "https://ipinfo.io/json".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_color_mode_key")]
    pub color_mode_key: String,
    #[serde(default = "default_color_cycle_key")]
    pub color_cycle_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            color_mode_key: default_color_mode_key(),
            color_cycle_key: default_color_cycle_key(),
        }
    }
}

fn default_color_mode_key() -> String {
    "isLitmusOn".to_string()
}

fn default_color_cycle_key() -> String {
    "isLitmusPlusOn".to_string()
}

impl BlogConfig {
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: BlogConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Embedded config, or defaults if it does not parse or validate
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("[CONFIG] {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        let distinct: HashSet<&str> = self.litmus.palette.iter().map(String::as_str).collect();
        if distinct.len() < MIN_PALETTE_SIZE || distinct.len() != self.litmus.palette.len() {
            return Err(BlogError::InvalidConfig(format!(
                "palette needs at least {} distinct colors, got {:?}",
                MIN_PALETTE_SIZE, self.litmus.palette
            )));
        }
        let fraction = self.fade.start_fraction;
        if !(0.0..1.0).contains(&fraction) {
            return Err(BlogError::InvalidConfig(format!(
                "fade start fraction must be in [0, 1), got {}",
                fraction
            )));
        }
        if self.litmus.interval_ms == 0 || self.clock.interval_ms == 0 {
            return Err(BlogError::InvalidConfig("intervals must be positive".to_string()));
        }
        if !is_language_tag(&self.clock.locale) {
            return Err(BlogError::InvalidConfig(format!(
                "clock locale {:?} is not a language tag",
                self.clock.locale
            )));
        }
        Ok(())
    }
}

/// Shape check for a BCP 47 tag: alphabetic primary subtag, alphanumeric subtags of 1-8
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Shared, read-only config handed out through context
pub type SharedConfig = Arc<BlogConfig>;

/// Get the config from context
pub fn use_config() -> SharedConfig {
    expect_context::<SharedConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = BlogConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.storage.color_mode_key, "isLitmusOn");
        assert_eq!(config.storage.color_cycle_key, "isLitmusPlusOn");
        assert!(config.litmus.palette.len() >= MIN_PALETTE_SIZE);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = BlogConfig::from_toml("").unwrap();
        assert_eq!(config, BlogConfig::default());
        assert_eq!(config.fade.start_fraction, 0.3);
        assert_eq!(config.litmus.interval_ms, 1000);
        assert_eq!(config.clock.locale, "en-US");
    }

    #[test]
    fn test_partial_document() {
        let config = BlogConfig::from_toml("[fade]\nstart_fraction = 0.5\n").unwrap();
        assert_eq!(config.fade.start_fraction, 0.5);
        assert_eq!(config.site.title, "A Life I Do Not Deserve");
    }

    #[test]
    fn test_short_palette_rejected() {
        let raw = "[litmus]\npalette = [\"red\", \"blue\"]\n";
        assert!(matches!(BlogConfig::from_toml(raw), Err(BlogError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_palette_rejected() {
        let raw = "[litmus]\npalette = [\"a\", \"b\", \"c\", \"d\", \"e\", \"f\", \"g\", \"h\", \"a\"]\n";
        assert!(BlogConfig::from_toml(raw).is_err());
    }

    #[test]
    fn test_fade_fraction_range() {
        assert!(BlogConfig::from_toml("[fade]\nstart_fraction = 1.0\n").is_err());
        assert!(BlogConfig::from_toml("[fade]\nstart_fraction = -0.1\n").is_err());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(BlogConfig::from_toml("[clock]\ninterval_ms = 0\n").is_err());
    }

    #[test]
    fn test_malformed_locale_rejected() {
        assert!(BlogConfig::from_toml("[clock]\nlocale = \"zh-Hant-TW\"\n").is_ok());
        assert!(BlogConfig::from_toml("[clock]\nlocale = \"\"\n").is_err());
        assert!(BlogConfig::from_toml("[clock]\nlocale = \"en US\"\n").is_err());
        assert!(BlogConfig::from_toml("[clock]\nlocale = \"en--US\"\n").is_err());
        assert!(BlogConfig::from_toml("[clock]\nlocale = \"12-US\"\n").is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(BlogConfig::from_toml("[fade"), Err(BlogError::Config(_))));
    }
}
