//! Address-to-coordinate resolution.
//!
//! Yandex is the primary geocoder; Nominatim is the fallback used when
//! Yandex rejects the request or is unreachable.

mod chain;
mod nominatim;
mod yandex;

use anyhow::Result;
use futures::future::BoxFuture;
use std::time::Duration;

use crate::config::GeocoderConfig;
use crate::models::Coordinate;

pub use chain::GeocodeFallbackChain;
pub use nominatim::NominatimGeocoder;
pub use yandex::YandexGeocoder;

/// Why an address could not be turned into a coordinate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeocodeError {
    #[error("address rejected by geocoder")]
    InvalidAddress,
    #[error("geocoder rejected the API credentials")]
    InvalidCredentials,
    #[error("geocoder unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("malformed geocoder response: {0}")]
    MalformedResponse(String),
    #[error("geocoder returned no results")]
    NoResults,
    #[error("address could not be resolved (primary: {primary}; fallback: {fallback})")]
    Unresolvable {
        primary: Box<GeocodeError>,
        fallback: Box<GeocodeError>,
    },
}

impl GeocodeError {
    /// Whether a failure of the primary geocoder should be retried on the fallback.
    pub fn triggers_fallback(&self) -> bool {
        matches!(
            self,
            GeocodeError::InvalidAddress
                | GeocodeError::InvalidCredentials
                | GeocodeError::ServiceUnavailable(_)
        )
    }

    /// Whether the failure is attributable to the address rather than to the service.
    pub fn is_client_error(&self) -> bool {
        match self {
            GeocodeError::InvalidAddress
            | GeocodeError::NoResults
            | GeocodeError::MalformedResponse(_) => true,
            GeocodeError::InvalidCredentials | GeocodeError::ServiceUnavailable(_) => false,
            GeocodeError::Unresolvable { fallback, .. } => fallback.is_client_error(),
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::ServiceUnavailable(e.to_string())
    }
}

/// A service that resolves a free-form address to a coordinate.
pub trait Geocoder: Send + Sync {
    fn name(&self) -> &'static str;

    fn geocode<'a>(&'a self, address: &'a str) -> BoxFuture<'a, Result<Coordinate, GeocodeError>>;
}

/// HTTP client shared by both geocoders.
pub fn build_http_client(config: &GeocoderConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_tags() {
        assert!(GeocodeError::InvalidAddress.triggers_fallback());
        assert!(GeocodeError::InvalidCredentials.triggers_fallback());
        assert!(GeocodeError::ServiceUnavailable("timeout".into()).triggers_fallback());
        assert!(!GeocodeError::NoResults.triggers_fallback());
        assert!(!GeocodeError::MalformedResponse("pos".into()).triggers_fallback());
    }

    #[test]
    fn test_client_error_classification() {
        assert!(GeocodeError::NoResults.is_client_error());
        assert!(!GeocodeError::InvalidCredentials.is_client_error());

        let rejected = GeocodeError::Unresolvable {
            primary: Box::new(GeocodeError::InvalidCredentials),
            fallback: Box::new(GeocodeError::NoResults),
        };
        assert!(rejected.is_client_error());

        let outage = GeocodeError::Unresolvable {
            primary: Box::new(GeocodeError::ServiceUnavailable("down".into())),
            fallback: Box::new(GeocodeError::ServiceUnavailable("down".into())),
        };
        assert!(!outage.is_client_error());
    }
}
