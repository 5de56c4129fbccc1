//! Nominatim (OpenStreetMap) geocoder, used as the fallback.

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{GeocodeError, Geocoder};
use crate::config::NominatimConfig;
use crate::models::Coordinate;

/// One search hit. Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder {
    client: Client,
    base_url: Url,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new(config: &NominatimConfig, client: Client) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).context("Invalid Nominatim base URL")?;
        Ok(Self {
            client,
            base_url,
            user_agent: config.user_agent.clone(),
        })
    }

    async fn lookup(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", address)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .send()
            .await?;

        let status = response.status();
        debug!("Nominatim responded {} for {:?}", status, address);
        if !status.is_success() {
            return Err(GeocodeError::ServiceUnavailable(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

impl Geocoder for NominatimGeocoder {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    fn geocode<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<Coordinate, GeocodeError>> {
        self.lookup(address).boxed()
    }
}

fn parse_response(body: &str) -> Result<Coordinate, GeocodeError> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)
        .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

    let place = places.first().ok_or(GeocodeError::NoResults)?;

    let lat: f64 = place
        .lat
        .trim()
        .parse()
        .map_err(|_| GeocodeError::MalformedResponse(format!("bad latitude {:?}", place.lat)))?;
    let lon: f64 = place
        .lon
        .trim()
        .parse()
        .map_err(|_| GeocodeError::MalformedResponse(format!("bad longitude {:?}", place.lon)))?;

    Coordinate::new(lat, lon).map_err(|e| GeocodeError::MalformedResponse(e.to_string()))
}
