//! Readers for two public JSON APIs
//!
//! - [`astros`] - who is in space right now (open-notify)
//! - [`weather`] - apparent temperature for a city (weatherbit)
//!
//! Both are single blocking-style request/response exchanges. Failures are
//! returned to the caller untouched; nothing is retried.

pub mod astros;
pub mod weather;

use reqwest::Client;

use crate::config::NetConfig;
use crate::error::{Error, Result};

pub use astros::Astronaut;
pub use weather::{WeatherReading, celsius_to_fahrenheit};

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(Box::new(err))
    }
}

/// HTTP client bound to the configured endpoints
#[derive(Debug, Clone)]
pub struct NetClient {
    http: Client,
    config: NetConfig,
}

impl NetClient {
    /// Create a client for the given settings
    pub fn new(config: NetConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("acro/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch the people currently in space
    pub async fn astronauts(&self) -> Result<Vec<Astronaut>> {
        astros::fetch(&self.http, &self.config.astros_url).await
    }

    /// Fetch the current reading for `city`, or the configured city
    pub async fn weather(&self, city: Option<&str>) -> Result<WeatherReading> {
        let key = self.config.resolved_weather_key().ok_or_else(|| {
            Error::InvalidInput(format!(
                "no weather API key; set net.weather_key in the config or {}",
                NetConfig::WEATHER_KEY_ENV
            ))
        })?;
        let query = weather::WeatherQuery {
            city: city.unwrap_or(&self.config.city),
            state: &self.config.state,
            country: &self.config.country,
            key: &key,
        };
        weather::fetch(&self.http, &self.config.weather_url, &query).await
    }
}
