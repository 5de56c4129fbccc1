//! Core data models for the ring proximity service.

pub mod coordinate;

pub use coordinate::{BoundaryVertex, Coordinate, CoordinateError, DistanceKm};
