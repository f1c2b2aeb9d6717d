//! Core data types for stop places and the lines that serve them.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Data Structures
// ============================================================================

/// A stop place as returned by a bounding-box query.
///
/// `id` is the only field the engine reconciles on. Everything else may
/// change between two fetches of the same stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    /// x = longitude, y = latitude
    pub location: Point,
    pub transport_modes: Vec<TransportMode>,
}

impl Stop {
    pub fn new(
        id: impl Into<StopIdentifier>,
        name: impl AsRef<str>,
        latitude: f64,
        longitude: f64,
        transport_modes: impl IntoIterator<Item = TransportMode>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.as_ref().into(),
            location: Point::new(longitude, latitude),
            transport_modes: transport_modes.into_iter().collect(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }
}

/// A line serving one of the quays of a stop place.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    /// Rider-facing code, e.g. "5", "31E", "12N"
    pub public_code: Arc<str>,
    /// Operating authority, e.g. "Ruter"
    pub authority_name: Arc<str>,
}

impl Line {
    pub fn new(public_code: impl AsRef<str>, authority_name: impl AsRef<str>) -> Self {
        Self {
            public_code: public_code.as_ref().into(),
            authority_name: authority_name.as_ref().into(),
        }
    }
}

/// A boarding position within a stop place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Quay {
    pub lines: Vec<Line>,
}

/// Result of a per-stop detail query.
#[derive(Clone, Debug, PartialEq)]
pub struct StopDetail {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub transport_modes: Vec<TransportMode>,
    pub quays: Vec<Quay>,
}

impl StopDetail {
    /// All lines of all quays, in quay order. May contain duplicates.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.quays.iter().flat_map(|quay| quay.lines.iter())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not complete (connection, timeout, HTTP status).
    #[error("Network failure: {0}")]
    Network(String),

    /// A response arrived but lacks the expected structure.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_coordinates() {
        let stop = Stop::new(
            "NSR:StopPlace:58366",
            "Jernbanetorget",
            59.911898,
            10.75038,
            [TransportMode::new("bus"), TransportMode::new("metro")],
        );

        assert_eq!(stop.latitude(), 59.911898);
        assert_eq!(stop.longitude(), 10.75038);
        assert_eq!(stop.transport_modes.len(), 2);
    }

    #[test]
    fn test_detail_lines_flatten_quays() {
        let detail = StopDetail {
            id: StopIdentifier::new("NSR:StopPlace:1"),
            name: "Storo".into(),
            transport_modes: vec![TransportMode::new("bus")],
            quays: vec![
                Quay {
                    lines: vec![Line::new("54", "Ruter"), Line::new("11", "Ruter")],
                },
                Quay::default(),
                Quay {
                    lines: vec![Line::new("54", "Ruter")],
                },
            ],
        };

        let codes: Vec<&str> = detail.lines().map(|line| &*line.public_code).collect();
        assert_eq!(codes, ["54", "11", "54"]);
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::InvalidResponse("missing field `id`".into());
        assert_eq!(err.to_string(), "Invalid response: missing field `id`");
    }
}
