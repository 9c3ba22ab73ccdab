//! Network commands - astronauts and weather

use acro::net::NetClient;
use acro::output::{AstronautsResult, Render, WeatherResult};

use super::Context;

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread().enable_all().build()?)
}

/// List the people currently in space
pub fn astros(ctx: &Context) -> anyhow::Result<()> {
    let client = NetClient::new(ctx.config.net.clone())?;
    let people = runtime()?.block_on(client.astronauts())?;

    let result = AstronautsResult {
        people: people.into_iter().map(|p| p.name).collect(),
    };
    result.render(ctx.output_mode)?;
    Ok(())
}

/// Show the apparent temperature for a city
pub fn weather(ctx: &Context, city: Option<&str>) -> anyhow::Result<()> {
    let client = NetClient::new(ctx.config.net.clone())?;
    let reading = runtime()?.block_on(client.weather(city))?;

    let result = WeatherResult {
        fahrenheit: reading.fahrenheit(),
        celsius: reading.celsius,
        city: reading.city,
    };
    result.render(ctx.output_mode)?;
    Ok(())
}
