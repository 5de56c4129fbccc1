//! Yandex HTTP geocoder (primary).

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{GeocodeError, Geocoder};
use crate::config::YandexConfig;
use crate::models::Coordinate;

#[derive(Debug, Deserialize)]
struct YandexResponse {
    response: YandexBody,
}

#[derive(Debug, Deserialize)]
struct YandexBody {
    #[serde(rename = "GeoObjectCollection")]
    collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember")]
    members: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: GeoPoint,
}

#[derive(Debug, Deserialize)]
struct GeoPoint {
    /// "<longitude> <latitude>"
    pos: String,
}

pub struct YandexGeocoder {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl YandexGeocoder {
    pub fn new(config: &YandexConfig, client: Client) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).context("Invalid Yandex base URL")?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    async fn lookup(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GeocodeError::InvalidCredentials)?;

        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", api_key)
            .append_pair("geocode", address)
            .append_pair("format", "json");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("Yandex responded {} for {:?}", status, address);

        if status == StatusCode::BAD_REQUEST {
            return Err(GeocodeError::InvalidAddress);
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(GeocodeError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(GeocodeError::ServiceUnavailable(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

impl Geocoder for YandexGeocoder {
    fn name(&self) -> &'static str {
        "yandex"
    }

    fn geocode<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<Coordinate, GeocodeError>> {
        self.lookup(address).boxed()
    }
}

/// Decode a Yandex response body. The last feature member wins.
fn parse_response(body: &str) -> Result<Coordinate, GeocodeError> {
    let parsed: YandexResponse = serde_json::from_str(body)
        .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

    let member = parsed
        .response
        .collection
        .members
        .last()
        .ok_or(GeocodeError::NoResults)?;

    parse_pos(&member.geo_object.point.pos)
}

/// Yandex orders positions longitude first.
fn parse_pos(pos: &str) -> Result<Coordinate, GeocodeError> {
    let malformed = || GeocodeError::MalformedResponse(format!("bad position {:?}", pos));

    let mut parts = pos.split_whitespace().map(str::parse::<f64>);
    let (lon, lat) = match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(lon)), Some(Ok(lat)), None) => (lon, lat),
        _ => return Err(malformed()),
    };

    Coordinate::new(lat, lon).map_err(|e| GeocodeError::MalformedResponse(e.to_string()))
}
