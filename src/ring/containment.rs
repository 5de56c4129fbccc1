//! Point-in-polygon membership test against the ring.

use geo::{Contains, LineString, Polygon};

use super::BoundaryCurve;
use crate::models::Coordinate;

/// Planar polygon built from the ring, with (lon, lat) used directly as (x, y).
///
/// A point lying exactly on an edge or vertex is not contained.
pub struct ContainmentTester {
    polygon: Polygon<f64>,
}

impl ContainmentTester {
    pub fn new(curve: &BoundaryCurve) -> Self {
        // LineString -> Polygon closes the exterior ring if needed
        let exterior: LineString<f64> = curve.points().iter().copied().collect();
        Self {
            polygon: Polygon::new(exterior, vec![]),
        }
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.polygon.contains(&point.to_point())
    }
}
