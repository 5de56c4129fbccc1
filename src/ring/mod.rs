//! Containment and distance queries against the ring road.
//!
//! The ring is a fixed, ordered list of kilometer markers loaded once at
//! startup. Every query is a pure function of a coordinate and that list.

mod boundary;
mod containment;
mod dataset;
mod distance;
mod service;

pub use boundary::{BoundaryCurve, BoundaryError, MIN_VERTICES};
pub use containment::ContainmentTester;
pub use distance::{ApproximateSearch, DistanceStrategy, LinearScan, Projection, StrategyKind};
pub use service::{RingPosition, RingService};
