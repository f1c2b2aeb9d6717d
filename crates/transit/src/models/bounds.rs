//! Geographic bounding boxes used for viewport queries.

use geo::{Coord, Point, Rect};

/// An axis-aligned latitude/longitude box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Build from any two opposite corners; the result is normalised.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_latitude: a.y().min(b.y()),
            min_longitude: a.x().min(b.x()),
            max_latitude: a.y().max(b.y()),
            max_longitude: a.x().max(b.x()),
        }
    }

    /// Inclusive on all edges.
    pub fn contains(&self, point: Point) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&point.y())
            && (self.min_longitude..=self.max_longitude).contains(&point.x())
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            Coord {
                x: self.min_longitude,
                y: self.min_latitude,
            },
            Coord {
                x: self.max_longitude,
                y: self.max_latitude,
            },
        )
    }
}

impl From<Rect> for BoundingBox {
    fn from(rect: Rect) -> Self {
        Self::from_corners(rect.min().into(), rect.max().into())
    }
}
