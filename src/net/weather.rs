//! Current apparent temperature

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Query parameters for the current-weather endpoint
#[derive(Debug, Clone, Copy)]
pub struct WeatherQuery<'a> {
    /// City name
    pub city: &'a str,
    /// State or region code
    pub state: &'a str,
    /// Country code
    pub country: &'a str,
    /// API key
    pub key: &'a str,
}

/// Apparent temperature for a city
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    /// City name as reported, or as requested when the API omits it
    pub city: String,
    /// Apparent temperature in Celsius
    pub celsius: f64,
}

impl WeatherReading {
    /// Apparent temperature in Fahrenheit
    #[must_use]
    pub fn fahrenheit(&self) -> f64 {
        celsius_to_fahrenheit(self.celsius)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    #[serde(default)]
    data: Vec<Observation>,
}

#[derive(Debug, Deserialize)]
struct Observation {
    app_temp: f64,
    #[serde(default)]
    city_name: Option<String>,
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius.mul_add(9.0 / 5.0, 32.0)
}

/// GET the current reading from `base_url`
pub async fn fetch(client: &Client, base_url: &str, query: &WeatherQuery<'_>) -> Result<WeatherReading> {
    let url = Url::parse_with_params(
        base_url,
        &[
            ("city", query.city),
            ("state", query.state),
            ("country", query.country),
            ("key", query.key),
        ],
    )
    .map_err(|e| Error::InvalidInput(format!("bad weather URL {base_url}: {e}")))?;

    log::debug!("GET {base_url} for {}", query.city);
    let response = client.get(url).send().await?.error_for_status()?;
    let body: WeatherResponse = response.json().await?;

    let observation = body.data.into_iter().next().ok_or(Error::MissingField("data[0]"))?;
    Ok(WeatherReading {
        city: observation.city_name.unwrap_or_else(|| query.city.to_string()),
        celsius: observation.app_temp,
    })
}
