//! MKAD - distance from an address to the Moscow Ring Road
//!
//! This library provides the ring geometry engine, the geocoder fallback
//! chain, and the HTTP API used by the server binary.

pub mod api;
pub mod config;
pub mod geocoder;
pub mod models;
pub mod ring;

pub use models::{BoundaryVertex, Coordinate, DistanceKm};
pub use ring::{BoundaryCurve, RingPosition, RingService, StrategyKind};
