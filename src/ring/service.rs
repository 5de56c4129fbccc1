//! Ring lookup service: containment first, distance only when outside.

use std::sync::Arc;
use tracing::debug;

use super::{BoundaryCurve, ContainmentTester, DistanceStrategy, StrategyKind};
use crate::models::{Coordinate, DistanceKm};

/// Where a point sits relative to the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
    Inside,
    Outside { distance: DistanceKm },
}

/// Answers containment and distance queries against one shared ring.
pub struct RingService {
    curve: Arc<BoundaryCurve>,
    tester: ContainmentTester,
    strategy: Box<dyn DistanceStrategy>,
}

impl RingService {
    /// Create a ring service using the given distance strategy
    pub fn new(curve: Arc<BoundaryCurve>, kind: StrategyKind) -> Self {
        Self::with_strategy(curve, kind.build())
    }

    /// Create a ring service around a custom strategy
    pub fn with_strategy(curve: Arc<BoundaryCurve>, strategy: Box<dyn DistanceStrategy>) -> Self {
        let tester = ContainmentTester::new(&curve);
        Self {
            curve,
            tester,
            strategy,
        }
    }

    /// Strictly inside the ring; boundary points are outside
    pub fn contains(&self, point: Coordinate) -> bool {
        self.tester.contains(point)
    }

    /// Distance from the ring, whether or not the point is inside
    pub fn distance(&self, point: Coordinate) -> DistanceKm {
        self.strategy.distance(&self.curve, point)
    }

    /// Containment first, distance only for outside points
    pub fn locate(&self, point: Coordinate) -> RingPosition {
        if self.contains(point) {
            debug!("{} is inside the ring", point);
            return RingPosition::Inside;
        }

        let distance = self.distance(point);
        debug!(
            "{} is {} from the ring ({})",
            point,
            distance,
            self.strategy.name()
        );
        RingPosition::Outside { distance }
    }

    /// Name of the configured distance strategy
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Get the boundary curve (for stats/debugging)
    pub fn curve(&self) -> &BoundaryCurve {
        &self.curve
    }
}
