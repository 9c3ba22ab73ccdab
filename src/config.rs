//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.acro/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Global acro configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Glossary storage settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Lookup preferences
    #[serde(default)]
    pub lookup: LookupConfig,
    /// Network reader settings
    #[serde(default)]
    pub net: NetConfig,
}

/// Glossary storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Glossary file; defaults to `acronyms.txt` in the working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Lookup preferences
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Match the acronym field exactly instead of any substring of the line
    #[serde(default)]
    pub exact: bool,
}

/// Network reader settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetConfig {
    /// Endpoint listing the people currently in space
    #[serde(default = "default_astros_url")]
    pub astros_url: String,
    /// Current-weather endpoint
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
    /// Weather API key (falls back to `WEATHERBIT_API_KEY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_key: Option<String>,
    /// City used when none is given on the command line
    #[serde(default = "default_city")]
    pub city: String,
    /// State or region code sent with the city
    #[serde(default = "default_state")]
    pub state: String,
    /// Country code sent with the city
    #[serde(default = "default_country")]
    pub country: String,
}

fn default_astros_url() -> String {
    "http://api.open-notify.org/astros.json".to_string()
}

fn default_weather_url() -> String {
    "https://api.weatherbit.io/v2.0/current".to_string()
}

fn default_city() -> String {
    "St. Louis".to_string()
}

fn default_state() -> String {
    "MO".to_string()
}

fn default_country() -> String {
    "US".to_string()
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            astros_url: default_astros_url(),
            weather_url: default_weather_url(),
            weather_key: None,
            city: default_city(),
            state: default_state(),
            country: default_country(),
        }
    }
}

impl NetConfig {
    /// Environment variable holding the weather API key
    pub const WEATHER_KEY_ENV: &'static str = "WEATHERBIT_API_KEY";

    /// The configured weather key, or the one from the environment
    #[must_use]
    pub fn resolved_weather_key(&self) -> Option<String> {
        self.weather_key
            .clone()
            .or_else(|| std::env::var(Self::WEATHER_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or create default if not exists
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                log::warn!("ignoring malformed config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                log::warn!("cannot read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Keys accepted by [`GlobalConfig::set`]
    pub const KEYS: [&'static str; 6] = [
        "store.path",
        "lookup.exact",
        "net.city",
        "net.state",
        "net.country",
        "net.weather_key",
    ];

    /// Set one dotted key from its string form
    ///
    /// An empty value clears the optional keys (`store.path`,
    /// `net.weather_key`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        let value = value.trim();
        match key {
            "store.path" => {
                self.store.path = (!value.is_empty()).then(|| PathBuf::from(value));
            },
            "lookup.exact" => {
                self.lookup.exact = value
                    .parse()
                    .map_err(|_| format!("Invalid value for lookup.exact: {value}. Use: true, false"))?;
            },
            "net.city" => self.net.city = value.to_string(),
            "net.state" => self.net.state = value.to_string(),
            "net.country" => self.net.country = value.to_string(),
            "net.weather_key" => {
                self.net.weather_key = (!value.is_empty()).then(|| value.to_string());
            },
            _ => {
                return Err(format!("Unknown config key: {key}. Use: {}", Self::KEYS.join(", ")));
            },
        }
        Ok(())
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
