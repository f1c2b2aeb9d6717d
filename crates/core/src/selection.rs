//! Single-selection state and marker highlight.
//!
//! At most one marker carries the highlight, and this module is the only
//! place that sets or clears it.

use stopmap_transit::StopIdentifier;
use tracing::debug;

use crate::marker::{MarkerId, MarkerRegistry};
use crate::surface::Surfaces;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected {
        stop_id: StopIdentifier,
        marker: MarkerId,
    },
}

#[derive(Debug, Default)]
pub struct SelectionManager {
    selection: Selection,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_stop(&self) -> Option<&StopIdentifier> {
        match &self.selection {
            Selection::None => None,
            Selection::Selected { stop_id, .. } => Some(stop_id),
        }
    }

    pub fn is_selected(&self, stop_id: &StopIdentifier) -> bool {
        self.selected_stop() == Some(stop_id)
    }

    /// Highlight the marker for `stop_id` and show the loading placeholder.
    ///
    /// Returns `false` and changes nothing when the stop has no live marker.
    pub fn select(
        &mut self,
        stop_id: &StopIdentifier,
        registry: &mut MarkerRegistry,
        surfaces: &mut Surfaces<'_>,
    ) -> bool {
        let Some(marker_id) = registry.get(stop_id).map(|marker| marker.id()) else {
            debug!(stop = %stop_id, "click on a stop without a live marker");
            return false;
        };

        if let Selection::Selected { stop_id: current, .. } = &self.selection {
            if current != stop_id {
                if let Some(previous) = registry.get_mut(current) {
                    previous.set_selected(false);
                    surfaces.map.set_highlight(previous, false);
                }
            }
        }

        if let Some(marker) = registry.get_mut(stop_id) {
            if !marker.is_selected() {
                marker.set_selected(true);
                surfaces.map.set_highlight(marker, true);
            }
            surfaces.panel.show_loading(marker.stop());
        }

        self.selection = Selection::Selected {
            stop_id: stop_id.clone(),
            marker: marker_id,
        };
        true
    }

    /// Drop the highlight and hide the panel. Returns the stop that was
    /// selected, if any.
    pub fn clear(
        &mut self,
        registry: &mut MarkerRegistry,
        surfaces: &mut Surfaces<'_>,
    ) -> Option<StopIdentifier> {
        let Selection::Selected { stop_id, .. } = std::mem::take(&mut self.selection) else {
            return None;
        };

        if let Some(marker) = registry.get_mut(&stop_id) {
            marker.set_selected(false);
            surfaces.map.set_highlight(marker, false);
        }
        surfaces.panel.hide();

        Some(stop_id)
    }
}
