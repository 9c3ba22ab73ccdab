//! People currently in space

use reqwest::Client;
use serde::Deserialize;

use crate::error::Result;

/// One person aboard a spacecraft
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Astronaut {
    /// Full name
    pub name: String,
    /// Spacecraft, when reported
    #[serde(default)]
    pub craft: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AstrosResponse {
    people: Vec<Astronaut>,
}

/// GET the astronaut list from `url`
pub async fn fetch(client: &Client, url: &str) -> Result<Vec<Astronaut>> {
    log::debug!("GET {url}");
    let response = client.get(url).send().await?.error_for_status()?;
    let body: AstrosResponse = response.json().await?;
    log::debug!("{} people in space", body.people.len());
    Ok(body.people)
}
