//! Coordinate and distance value types shared by the ring engine and the geocoders.

use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rejected coordinate input.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("coordinate is not finite: ({lat}, {lon})")]
    NotFinite { lat: f64, lon: f64 },
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

/// WGS84 latitude/longitude pair in decimal degrees.
///
/// Fields are private so every value in circulation has passed [`Coordinate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::LongitudeOutOfRange(lon));
        }
        Ok(Self { lat, lon })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Planar point with x = longitude, y = latitude.
    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// One kilometer marker of the ring, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundaryVertex {
    pub index: u32,
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lon: f64,
}

impl BoundaryVertex {
    pub const fn new(index: u32, lat: f64, lon: f64) -> Self {
        Self { index, lat, lon }
    }

    pub fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Distance to the ring in whole kilometers, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DistanceKm(pub u32);

impl DistanceKm {
    /// Truncate a distance in meters to whole kilometers.
    pub fn from_meters(meters: f64) -> Self {
        // `as` saturates, so a negative input can only come out as zero
        Self((meters / 1000.0).trunc() as u32)
    }

    pub fn km(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}
