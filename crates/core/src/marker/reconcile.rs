//! Diff an incoming stop set against the live registry.

use std::collections::HashSet;

use stopmap_transit::{Stop, StopIdentifier};
use tracing::{debug, trace};

use crate::icon::IconCache;
use crate::marker::MarkerRegistry;
use crate::selection::SelectionManager;
use crate::surface::Surfaces;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub added: Vec<StopIdentifier>,
    pub removed: Vec<StopIdentifier>,
    pub retained: usize,
}

/// Replace `previous` with a registry whose key set is exactly the ids of
/// `incoming`.
///
/// - ids in both keep their marker untouched (same [`MarkerId`], icon and
///   highlight), even if the stop's other fields changed;
/// - new ids get a fresh marker with an icon from `icons`;
/// - missing ids are removed from the map. If the selected stop is among
///   them, the selection is cleared first.
///
/// Duplicate ids in `incoming` keep their first occurrence.
///
/// [`MarkerId`]: crate::marker::MarkerId
pub fn reconcile(
    mut previous: MarkerRegistry,
    incoming: Vec<Stop>,
    icons: &mut IconCache,
    selection: &mut SelectionManager,
    surfaces: &mut Surfaces<'_>,
) -> (MarkerRegistry, ReconcileSummary) {
    let mut seen = HashSet::with_capacity(incoming.len());
    let incoming: Vec<Stop> = incoming
        .into_iter()
        .filter(|stop| {
            let first = seen.insert(stop.id.clone());
            if !first {
                trace!(stop = %stop.id, "duplicate stop in refresh result");
            }
            first
        })
        .collect();

    let mut removed: Vec<StopIdentifier> = previous
        .markers
        .keys()
        .filter(|id| !seen.contains(*id))
        .cloned()
        .collect();
    removed.sort();

    let selected_removed = selection
        .selected_stop()
        .is_some_and(|selected| removed.contains(selected));
    if selected_removed {
        if let Some(stop) = selection.clear(&mut previous, surfaces) {
            debug!(stop = %stop, "selected stop left the viewport");
        }
    }

    let mut next = MarkerRegistry::with_ids_from(&previous, incoming.len());
    for id in &removed {
        if let Some(marker) = previous.markers.remove(id) {
            surfaces.map.remove_marker(&marker);
        }
    }

    let mut summary = ReconcileSummary {
        removed,
        ..Default::default()
    };

    for stop in incoming {
        if let Some(marker) = previous.markers.remove(&stop.id) {
            next.markers.insert(stop.id, marker);
            summary.retained += 1;
            continue;
        }

        let icon = icons.get_or_create(&stop.transport_modes);
        let id = stop.id.clone();
        let marker = next.create(stop, icon);
        surfaces.map.add_marker(&marker);
        next.markers.insert(id.clone(), marker);
        summary.added.push(id);
    }

    (next, summary)
}
