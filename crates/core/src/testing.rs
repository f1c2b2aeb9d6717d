//! Recording surfaces and fixtures shared by the unit tests.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use geo::Point;
use stopmap_transit::{BoundingBox, Stop, StopIdentifier, TransportMode};

use crate::marker::{Marker, MarkerId};
use crate::panel::PanelContent;
use crate::surface::{DetailPanelSurface, MapSurface, Notice};
use crate::viewport::Viewport;

pub(crate) fn stop(id: &str, modes: &[&str]) -> Stop {
    Stop::new(
        id,
        format!("Stop {id}"),
        59.91,
        10.75,
        modes.iter().map(|m| TransportMode::new(m)),
    )
}

pub(crate) fn ids(ids: &[&str]) -> Vec<StopIdentifier> {
    ids.iter().map(|id| StopIdentifier::new(id)).collect()
}

pub(crate) fn sentrum() -> BoundingBox {
    BoundingBox::from_corners(Point::new(10.74, 59.90), Point::new(10.76, 59.92))
}

#[derive(Debug, Default)]
pub(crate) struct MapLog {
    pub visible: BTreeMap<StopIdentifier, MarkerId>,
    pub highlighted: BTreeSet<StopIdentifier>,
    pub added: usize,
    pub removed: usize,
    pub notices: Vec<Notice>,
}

/// Map surface that asserts markers are never added twice or removed unseen
#[derive(Clone, Debug)]
pub(crate) struct RecordingMap {
    pub viewport: Viewport,
    log: Arc<Mutex<MapLog>>,
}

impl Default for RecordingMap {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(15.0, sentrum()),
            log: Arc::default(),
        }
    }
}

impl RecordingMap {
    pub fn log(&self) -> MutexGuard<'_, MapLog> {
        self.log.lock().unwrap()
    }

    pub fn visible(&self) -> Vec<StopIdentifier> {
        self.log().visible.keys().cloned().collect()
    }

    pub fn highlighted(&self) -> Vec<StopIdentifier> {
        self.log().highlighted.iter().cloned().collect()
    }
}

impl MapSurface for RecordingMap {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn add_marker(&mut self, marker: &Marker) {
        let mut log = self.log();
        let previous = log.visible.insert(marker.stop_id().clone(), marker.id());
        assert!(previous.is_none(), "marker for {} added twice", marker.stop_id());
        log.added += 1;
    }

    fn remove_marker(&mut self, marker: &Marker) {
        let mut log = self.log();
        let removed = log.visible.remove(marker.stop_id());
        assert_eq!(removed, Some(marker.id()), "removed a marker that was not shown");
        assert!(
            !log.highlighted.contains(marker.stop_id()),
            "removed {} while highlighted",
            marker.stop_id()
        );
        log.removed += 1;
    }

    fn set_highlight(&mut self, marker: &Marker, highlighted: bool) {
        let mut log = self.log();
        assert!(log.visible.contains_key(marker.stop_id()));
        if highlighted {
            log.highlighted.insert(marker.stop_id().clone());
        } else {
            log.highlighted.remove(marker.stop_id());
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.log().notices.push(notice.clone());
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum PanelState {
    #[default]
    Hidden,
    Loading(StopIdentifier),
    Detail(PanelContent),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct RecordingPanel {
    state: Arc<Mutex<PanelState>>,
}

impl RecordingPanel {
    pub fn state(&self) -> PanelState {
        self.state.lock().unwrap().clone()
    }
}

impl DetailPanelSurface for RecordingPanel {
    fn show_loading(&mut self, stop: &Stop) {
        *self.state.lock().unwrap() = PanelState::Loading(stop.id.clone());
    }

    fn show_detail(&mut self, content: &PanelContent) {
        *self.state.lock().unwrap() = PanelState::Detail(content.clone());
    }

    fn hide(&mut self) {
        *self.state.lock().unwrap() = PanelState::Hidden;
    }
}
