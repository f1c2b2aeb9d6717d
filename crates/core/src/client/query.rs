//! GraphQL documents sent to the journey planner API.

use serde::Serialize;
use serde_json::{Value, json};
use stopmap_transit::{BoundingBox, StopIdentifier};

pub const STOPS_IN_BOUNDS: &str = r#"
query StopsInBounds(
    $minimumLatitude: Float!
    $minimumLongitude: Float!
    $maximumLatitude: Float!
    $maximumLongitude: Float!
) {
    stopPlacesByBbox(
        minimumLatitude: $minimumLatitude
        minimumLongitude: $minimumLongitude
        maximumLatitude: $maximumLatitude
        maximumLongitude: $maximumLongitude
    ) {
        id
        name
        latitude
        longitude
        transportMode
    }
}
"#;

pub const STOP_DETAIL: &str = r#"
query StopDetail($id: String!) {
    stopPlace(id: $id) {
        id
        name
        transportMode
        quays {
            lines {
                publicCode
                authority {
                    name
                }
            }
        }
    }
}
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn stops_in_bounds(bounds: &BoundingBox) -> Self {
        Self {
            query: STOPS_IN_BOUNDS,
            variables: json!({
                "minimumLatitude": bounds.min_latitude,
                "minimumLongitude": bounds.min_longitude,
                "maximumLatitude": bounds.max_latitude,
                "maximumLongitude": bounds.max_longitude,
            }),
        }
    }

    pub fn stop_detail(stop_id: &StopIdentifier) -> Self {
        Self {
            query: STOP_DETAIL,
            variables: json!({ "id": stop_id.as_str() }),
        }
    }
}
