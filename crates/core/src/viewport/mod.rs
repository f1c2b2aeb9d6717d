//! Viewport observation and the minimum-zoom gate.

use stopmap_transit::BoundingBox;
use tracing::debug;

pub mod debounce;

pub use debounce::{DebounceToken, Debouncer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub bounds: BoundingBox,
}

impl Viewport {
    pub fn new(zoom: f64, bounds: BoundingBox) -> Self {
        Self { zoom, bounds }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportDecision {
    /// Zoomed out past the gate: clear everything, fetch nothing
    BelowMinimum,
    /// Schedule a refresh for these bounds
    Refresh(BoundingBox),
}

#[derive(Debug)]
pub struct ViewportController {
    min_zoom: f64,
    last: Option<Viewport>,
}

impl ViewportController {
    pub fn new(min_zoom: f64) -> Self {
        Self {
            min_zoom,
            last: None,
        }
    }

    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// The most recently observed viewport
    pub fn last(&self) -> Option<&Viewport> {
        self.last.as_ref()
    }

    pub fn observe(&mut self, viewport: Viewport) -> ViewportDecision {
        self.last = Some(viewport);

        if viewport.zoom < self.min_zoom {
            debug!(zoom = viewport.zoom, min_zoom = self.min_zoom, "below minimum zoom");
            ViewportDecision::BelowMinimum
        } else {
            ViewportDecision::Refresh(viewport.bounds)
        }
    }
}
