use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ring::StrategyKind;

/// Environment variable that overrides `geocoder.yandex.api_key`.
pub const YANDEX_API_KEY_ENV: &str = "YANDEX_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub ring: RingConfig,
    pub geocoder: GeocoderConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:5000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct RingConfig {
    /// CSV dataset to use instead of the built-in MKAD markers
    pub file: Option<PathBuf>,
    pub strategy: StrategyKind,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeocoderConfig {
    pub timeout_secs: u64,
    pub yandex: YandexConfig,
    pub nominatim: NominatimConfig,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            yandex: YandexConfig::default(),
            nominatim: NominatimConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct YandexConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for YandexConfig {
    fn default() -> Self {
        Self {
            base_url: "https://geocode-maps.yandex.ru/1.x/".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "mkad".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Use `key` as the Yandex API key when it is set and non-empty.
    pub fn with_yandex_key(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.geocoder.yandex.api_key = Some(key);
        }
        self
    }
}
