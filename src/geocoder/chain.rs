use tracing::{debug, warn};

use super::{GeocodeError, Geocoder};
use crate::models::Coordinate;

/// Tries the primary geocoder, then the fallback for failures that a
/// different service might not share.
pub struct GeocodeFallbackChain {
    primary: Box<dyn Geocoder>,
    fallback: Box<dyn Geocoder>,
}

impl GeocodeFallbackChain {
    pub fn new(primary: Box<dyn Geocoder>, fallback: Box<dyn Geocoder>) -> Self {
        Self { primary, fallback }
    }

    pub async fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodeError::InvalidAddress);
        }

        let primary_err = match self.primary.geocode(address).await {
            Ok(c) => {
                debug!("{} resolved {:?} to {}", self.primary.name(), address, c);
                return Ok(c);
            }
            Err(e) if e.triggers_fallback() => e,
            Err(e) => return Err(e),
        };

        warn!(
            "{} failed for {:?} ({}), trying {}",
            self.primary.name(),
            address,
            primary_err,
            self.fallback.name()
        );

        match self.fallback.geocode(address).await {
            Ok(c) => {
                debug!("{} resolved {:?} to {}", self.fallback.name(), address, c);
                Ok(c)
            }
            Err(fallback_err) => Err(GeocodeError::Unresolvable {
                primary: Box::new(primary_err),
                fallback: Box::new(fallback_err),
            }),
        }
    }
}
