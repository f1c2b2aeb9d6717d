//! The narrow interfaces the engine drives.
//!
//! Hosts implement [`MapSurface`] over their map widget and
//! [`DetailPanelSurface`] over the panel region. Marker clicks are reported
//! back to the session by stop id; no callbacks are handed to the host.

use std::fmt;

use stopmap_transit::Stop;

use crate::marker::Marker;
use crate::panel::PanelContent;
use crate::viewport::Viewport;

pub mod geojson;

pub use self::geojson::GeoJsonMarkerLayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    RefreshFailed,
    DetailFailed,
}

/// A user-visible, non-fatal message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub trait MapSurface {
    /// Current zoom level and visible bounds
    fn viewport(&self) -> Viewport;

    fn add_marker(&mut self, marker: &Marker);
    fn remove_marker(&mut self, marker: &Marker);
    fn set_highlight(&mut self, marker: &Marker, highlighted: bool);

    fn notify(&mut self, notice: &Notice);
}

pub trait DetailPanelSurface {
    /// Placeholder shown while the detail query is in flight
    fn show_loading(&mut self, stop: &Stop);
    fn show_detail(&mut self, content: &PanelContent);
    fn hide(&mut self);
}

/// Both surfaces, borrowed for the duration of one event
pub struct Surfaces<'a> {
    pub map: &'a mut dyn MapSurface,
    pub panel: &'a mut dyn DetailPanelSurface,
}

impl<'a> Surfaces<'a> {
    pub fn new(map: &'a mut dyn MapSurface, panel: &'a mut dyn DetailPanelSurface) -> Self {
        Self { map, panel }
    }
}
