//! Live markers keyed by stop id.

use std::collections::HashMap;

use stopmap_transit::{Stop, StopIdentifier};

use crate::icon::IconHandle;
use crate::surface::MapSurface;

pub mod reconcile;

pub use reconcile::{ReconcileSummary, reconcile};

/// Identity of one marker instance. A stop that disappears and comes back
/// gets a new id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(u64);

impl MarkerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Marker {
    id: MarkerId,
    stop: Stop,
    icon: IconHandle,
    selected: bool,
}

impl Marker {
    pub fn id(&self) -> MarkerId {
        self.id
    }

    pub fn stop_id(&self) -> &StopIdentifier {
        &self.stop.id
    }

    /// The stop as it was when this marker was created
    pub fn stop(&self) -> &Stop {
        &self.stop
    }

    pub fn icon(&self) -> &IconHandle {
        &self.icon
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    // only the selection manager flips this
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[derive(Debug, Default)]
pub struct MarkerRegistry {
    markers: HashMap<StopIdentifier, Marker>,
    next_id: u64,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stop_id: &StopIdentifier) -> Option<&Marker> {
        self.markers.get(stop_id)
    }

    pub(crate) fn get_mut(&mut self, stop_id: &StopIdentifier) -> Option<&mut Marker> {
        self.markers.get_mut(stop_id)
    }

    pub fn contains(&self, stop_id: &StopIdentifier) -> bool {
        self.markers.contains_key(stop_id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Registered stop ids in ascending order
    pub fn stop_ids(&self) -> Vec<StopIdentifier> {
        let mut ids: Vec<_> = self.markers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Remove every marker from the surface. Selection must be cleared first.
    pub fn clear(&mut self, map: &mut dyn MapSurface) -> usize {
        let count = self.markers.len();
        for (_, marker) in self.markers.drain() {
            map.remove_marker(&marker);
        }
        count
    }

    fn create(&mut self, stop: Stop, icon: IconHandle) -> Marker {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        Marker {
            id,
            stop,
            icon,
            selected: false,
        }
    }

    fn with_ids_from(previous: &MarkerRegistry, capacity: usize) -> Self {
        Self {
            markers: HashMap::with_capacity(capacity),
            next_id: previous.next_id,
        }
    }
}
