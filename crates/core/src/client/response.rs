//! Wire types and parsing of journey planner responses.
//!
//! Any missing field turns the whole response into
//! [`FetchError::InvalidResponse`]; nothing is partially accepted.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use stopmap_transit::{
    FetchError, Line, Quay, Result, Stop, StopDetail, StopIdentifier, TransportMode,
};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StopsInBoundsData {
    stop_places_by_bbox: Vec<WireStopPlace>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStopPlace {
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    transport_mode: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StopDetailData {
    stop_place: Option<WireStopPlaceDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStopPlaceDetail {
    name: String,
    transport_mode: Vec<String>,
    quays: Vec<WireQuay>,
}

#[derive(Debug, Deserialize)]
struct WireQuay {
    lines: Vec<WireLine>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireLine {
    public_code: String,
    authority: WireAuthority,
}

#[derive(Debug, Deserialize)]
struct WireAuthority {
    name: String,
}

fn parse_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)
        .map_err(|err| FetchError::InvalidResponse(err.to_string()))?;

    match envelope.data {
        Some(data) => Ok(data),
        None if !envelope.errors.is_empty() => Err(FetchError::InvalidResponse(
            envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )),
        None => Err(FetchError::InvalidResponse("response has no data".into())),
    }
}

fn modes(raw: Vec<String>) -> Vec<TransportMode> {
    raw.into_iter().map(TransportMode::from).collect()
}

pub fn parse_stops(body: &[u8]) -> Result<Vec<Stop>> {
    let data: StopsInBoundsData = parse_envelope(body)?;

    Ok(data
        .stop_places_by_bbox
        .into_iter()
        .map(|place| {
            Stop::new(
                place.id,
                place.name,
                place.latitude,
                place.longitude,
                modes(place.transport_mode),
            )
        })
        .collect())
}

pub fn parse_stop_detail(stop_id: &StopIdentifier, body: &[u8]) -> Result<StopDetail> {
    let data: StopDetailData = parse_envelope(body)?;
    let place = data
        .stop_place
        .ok_or_else(|| FetchError::InvalidResponse(format!("stop place {stop_id} not found")))?;

    Ok(StopDetail {
        id: stop_id.clone(),
        name: place.name.into(),
        transport_modes: modes(place.transport_mode),
        quays: place
            .quays
            .into_iter()
            .map(|quay| Quay {
                lines: quay
                    .lines
                    .into_iter()
                    .map(|line| Line::new(line.public_code, line.authority.name))
                    .collect(),
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stops() {
        let body = br#"{
            "data": {
                "stopPlacesByBbox": [
                    {
                        "id": "NSR:StopPlace:58366",
                        "name": "Jernbanetorget",
                        "latitude": 59.911898,
                        "longitude": 10.75038,
                        "transportMode": ["bus", "metro"]
                    },
                    {
                        "id": "NSR:StopPlace:4000",
                        "name": "Dronningens gate",
                        "latitude": 59.9107,
                        "longitude": 10.7471,
                        "transportMode": ["tram"]
                    }
                ]
            }
        }"#;

        let stops = parse_stops(body).unwrap();

        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].id.as_str(), "NSR:StopPlace:58366");
        assert_eq!(stops[0].latitude(), 59.911898);
        assert_eq!(stops[0].longitude(), 10.75038);
        assert_eq!(
            stops[0].transport_modes,
            [TransportMode::new("bus"), TransportMode::new("metro")]
        );
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let body = br#"{ "data": { "stopPlacesByBbox": [ { "id": "NSR:StopPlace:1", "name": "x" } ] } }"#;

        assert!(matches!(parse_stops(body), Err(FetchError::InvalidResponse(_))));
    }

    #[test]
    fn test_graphql_errors_without_data() {
        let body = br#"{ "errors": [ { "message": "bad bbox" }, { "message": "again" } ] }"#;

        assert_eq!(
            parse_stops(body),
            Err(FetchError::InvalidResponse("bad bbox; again".into()))
        );
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_stops(b"<html>502</html>"),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_parse_stop_detail() {
        let body = br#"{
            "data": {
                "stopPlace": {
                    "id": "NSR:StopPlace:58366",
                    "name": "Jernbanetorget",
                    "transportMode": ["bus", "metro"],
                    "quays": [
                        { "lines": [ { "publicCode": "5", "authority": { "name": "Ruter" } } ] },
                        { "lines": [] }
                    ]
                }
            }
        }"#;
        let id = StopIdentifier::new("NSR:StopPlace:58366");

        let detail = parse_stop_detail(&id, body).unwrap();

        assert_eq!(detail.id, id);
        assert_eq!(&*detail.name, "Jernbanetorget");
        assert_eq!(detail.quays.len(), 2);
        assert_eq!(detail.lines().next(), Some(&Line::new("5", "Ruter")));
    }

    #[test]
    fn test_unknown_stop_place() {
        let body = br#"{ "data": { "stopPlace": null } }"#;
        let id = StopIdentifier::new("NSR:StopPlace:0");

        assert!(matches!(
            parse_stop_detail(&id, body),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_line_without_authority_is_invalid() {
        let body = br#"{ "data": { "stopPlace": {
            "name": "x", "transportMode": [], "quays": [ { "lines": [ { "publicCode": "5" } ] } ]
        } } }"#;
        let id = StopIdentifier::new("NSR:StopPlace:1");

        assert!(matches!(
            parse_stop_detail(&id, body),
            Err(FetchError::InvalidResponse(_))
        ));
    }
}
