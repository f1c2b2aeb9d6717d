//! In-memory stop source backed by a spatial index.
//!
//! Serves bounding-box and detail queries from data held in memory. Useful
//! for offline bundles and as a deterministic stand-in for the remote API.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use rstar::RTree;

use crate::identifiers::*;
use crate::models::{BoundingBox, FetchError, Result, Stop, StopDetail};
use crate::network::StopDataSource;
use crate::spatial::index::{envelope_of, StopNode};

/// In-memory stop source with spatial indexing
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Debug)]
pub struct StaticStopSource {
    stops: Vec<Arc<Stop>>,
    details: HashMap<StopIdentifier, Arc<StopDetail>>,
    stop_tree: RTree<StopNode>,
}

impl StaticStopSource {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            details: HashMap::new(),
            stop_tree: RTree::new(),
        }
    }

    /// Build from raw data. Details without a matching stop are still served.
    pub fn from_data(stops: Vec<Stop>, details: Vec<StopDetail>) -> Self {
        let stops: Vec<Arc<Stop>> = stops.into_iter().map(Arc::new).collect();

        let details = details
            .into_iter()
            .map(|d| (d.id.clone(), Arc::new(d)))
            .collect();

        let stop_tree = RTree::bulk_load(
            stops
                .iter()
                .map(|s| StopNode::new(s.location, s.clone()))
                .collect(),
        );

        Self {
            stops,
            details,
            stop_tree,
        }
    }

    pub fn all_stops(&self) -> &[Arc<Stop>] {
        &self.stops
    }

    /// Stops inside `bounds`, ordered by id
    pub fn stops_in_bounds(&self, bounds: &BoundingBox) -> Vec<Stop> {
        let mut found: Vec<Stop> = self
            .stop_tree
            .locate_in_envelope_intersecting(&envelope_of(bounds))
            .map(|node| node.stop.as_ref().clone())
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }

    pub fn stop_detail(&self, id: &StopIdentifier) -> Option<&StopDetail> {
        self.details.get(id).map(Arc::as_ref)
    }
}

impl Default for StaticStopSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StopDataSource for StaticStopSource {
    fn fetch_stops_in_bounds<'a>(
        &'a self,
        bounds: BoundingBox,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Stop>>> + Send + 'a>> {
        Box::pin(async move { Ok(self.stops_in_bounds(&bounds)) })
    }

    fn fetch_stop_detail<'a>(
        &'a self,
        stop_id: &'a StopIdentifier,
    ) -> Pin<Box<dyn Future<Output = Result<StopDetail>> + Send + 'a>> {
        Box::pin(async move {
            self.stop_detail(stop_id).cloned().ok_or_else(|| {
                FetchError::InvalidResponse(format!("stop place {stop_id} not found"))
            })
        })
    }
}
