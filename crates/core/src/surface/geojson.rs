//! A headless [`MapSurface`] that keeps the visible markers as GeoJSON
//! point features, ready to hand to a web map as a symbol layer source.

use std::collections::BTreeMap;

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, Value, feature::Id};
use serde_json::json;
use stopmap_transit::StopIdentifier;

use super::{MapSurface, Notice};
use crate::marker::Marker;
use crate::viewport::Viewport;

#[derive(Debug)]
pub struct GeoJsonMarkerLayer {
    viewport: Viewport,
    features: BTreeMap<StopIdentifier, Feature>,
    notices: Vec<Notice>,
}

impl GeoJsonMarkerLayer {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            features: BTreeMap::new(),
            notices: Vec::new(),
        }
    }

    /// Record a camera move. The session still has to be told separately.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn feature(&self, stop_id: &StopIdentifier) -> Option<&Feature> {
        self.features.get(stop_id)
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Features ordered by stop id
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features.values().cloned().collect(),
            foreign_members: None,
        }
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&GeoJson::from(self.to_feature_collection()))
    }
}

fn marker_to_feature(marker: &Marker) -> Feature {
    let stop = marker.stop();
    let icon = &marker.icon().geometry;
    let modes: Vec<&str> = stop.transport_modes.iter().map(|m| m.as_str()).collect();

    let mut properties = serde_json::Map::new();
    properties.insert("marker".to_owned(), json!(marker.id().get()));
    properties.insert("name".to_owned(), json!(&*stop.name));
    properties.insert("modes".to_owned(), json!(modes));
    properties.insert("icon".to_owned(), json!(&*marker.icon().key));
    properties.insert("icon_width".to_owned(), json!(icon.width));
    properties.insert("icon_height".to_owned(), json!(icon.height));
    properties.insert("icon_anchor".to_owned(), json!([icon.anchor_x, icon.anchor_y]));
    properties.insert("highlighted".to_owned(), json!(marker.is_selected()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![
            stop.longitude(),
            stop.latitude(),
        ]))),
        id: Some(Id::String(stop.id.to_string())),
        properties: Some(properties),
        foreign_members: None,
    }
}

impl MapSurface for GeoJsonMarkerLayer {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn add_marker(&mut self, marker: &Marker) {
        self.features
            .insert(marker.stop_id().clone(), marker_to_feature(marker));
    }

    fn remove_marker(&mut self, marker: &Marker) {
        self.features.remove(marker.stop_id());
    }

    fn set_highlight(&mut self, marker: &Marker, highlighted: bool) {
        if let Some(feature) = self.features.get_mut(marker.stop_id()) {
            feature.set_property("highlighted", highlighted);
        }
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
