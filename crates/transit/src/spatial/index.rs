//! R-tree nodes for spatial indexing.
//!
//! Stops are indexed by raw `[longitude, latitude]`. Bounding-box lookups
//! are envelope intersections, so no geodesic correction is needed.

use std::sync::Arc;

use geo::Point;
use rstar::{RTreeObject, AABB};

use crate::models::{BoundingBox, Stop};

#[derive(Clone, Debug)]
pub struct StopNode {
    pub stop: Arc<Stop>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(location: Point, stop: Arc<Stop>) -> Self {
        Self {
            stop,
            point: [location.x(), location.y()],
        }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// Envelope matching `bounds` in the `[longitude, latitude]` space of [`StopNode`]
pub fn envelope_of(bounds: &BoundingBox) -> AABB<[f64; 2]> {
    AABB::from_corners(
        [bounds.min_longitude, bounds.min_latitude],
        [bounds.max_longitude, bounds.max_latitude],
    )
}
